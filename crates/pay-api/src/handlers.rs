//! # Request Handlers
//!
//! Axum request handlers for the payment API.
//! Order creation and checkout verification are thin wrappers over the
//! payments client; every client failure is mapped through `ApiError`.

use crate::error::{ApiError, ApiJson, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, Json};
use pay_core::{BoxedPaymentGateway, NewOrder, PaymentConfirmation};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use utoipa::ToSchema;

pub const WELCOME_MESSAGE: &str = "Welcome to Institute Management API";
pub const VERIFIED_MESSAGE: &str = "Payment verified and Subscription Activated";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Welcome response
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "development")]
    pub environment: String,
}

/// Create order request
#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderRequest {
    /// Plan label, used in the receipt
    #[serde(default = "default_plan_type")]
    #[schema(default = "monthly", example = "yearly")]
    pub plan_type: String,
    /// Amount in paise (1000 = ₹10)
    #[schema(example = 50000)]
    pub amount: i64,
}

fn default_plan_type() -> String {
    "monthly".to_string()
}

/// Create order response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct OrderResponse {
    /// Razorpay order ID
    pub id: String,
    pub currency: String,
    pub amount: i64,
    /// Public key for the client-side checkout (never the secret)
    pub key_id: String,
}

/// Verify payment request, as posted by the Razorpay checkout handler
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyPaymentRequest {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
}

impl From<VerifyPaymentRequest> for PaymentConfirmation {
    fn from(req: VerifyPaymentRequest) -> Self {
        PaymentConfirmation::new(
            req.razorpay_payment_id,
            req.razorpay_order_id,
            req.razorpay_signature,
        )
    }
}

/// Verify payment response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct VerifyPaymentResponse {
    pub status: String,
    pub message: String,
}

fn payments_client<'a>(
    state: &'a AppState,
    unavailable: &str,
) -> Result<&'a BoxedPaymentGateway, ApiError> {
    state
        .payments
        .as_ref()
        .ok_or_else(|| ApiError::PaymentsUnavailable(unavailable.to_string()))
}

// =============================================================================
// Handlers
// =============================================================================

/// Root endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    ),
    tag = "System"
)]
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        environment: state.settings.environment.clone(),
    })
}

/// Create a Razorpay order. Expects the amount in paise.
#[utoipa::path(
    post,
    path = "/api/payments/create-order",
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderResponse),
        (status = 400, description = "Rejected by Razorpay", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Razorpay is not configured", body = ErrorResponse)
    ),
    tag = "Payments"
)]
#[instrument(skip(state, request), fields(plan_type = %request.plan_type, amount = request.amount))]
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<OrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let gateway = payments_client(&state, "Razorpay is not configured on the server.")?;

    let order = NewOrder::for_plan(&request.plan_type, request.amount);

    let created = gateway.create_order(&order).await.map_err(|e| {
        error!("Razorpay error: {}", e);
        ApiError::from(e)
    })?;

    info!("Created order: id={}, amount={}", created.id, created.amount);

    Ok(Json(OrderResponse {
        id: created.id,
        currency: created.currency,
        amount: created.amount,
        key_id: state.public_key_id().to_string(),
    }))
}

/// Verify a completed checkout.
///
/// The subscription is not persisted here: marking the owning account
/// active needs the caller's identity, which this endpoint does not receive.
#[utoipa::path(
    post,
    path = "/api/payments/verify",
    request_body = VerifyPaymentRequest,
    responses(
        (status = 200, description = "Signature verified", body = VerifyPaymentResponse),
        (status = 400, description = "Signature mismatch or verification error", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Razorpay is not configured", body = ErrorResponse)
    ),
    tag = "Payments"
)]
#[instrument(skip(state, request), fields(order_id = %request.razorpay_order_id))]
pub async fn verify_payment(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<VerifyPaymentRequest>,
) -> Result<Json<VerifyPaymentResponse>, ApiError> {
    let gateway = payments_client(&state, "Razorpay not configured")?;

    let confirmation = PaymentConfirmation::from(request);

    gateway
        .verify_payment_signature(&confirmation)
        .map_err(|e| {
            error!("Verification error: {}", e);
            ApiError::from(e)
        })?;

    info!("Payment verified: payment={}", confirmation.payment_id);

    Ok(Json(VerifyPaymentResponse {
        status: "success".to_string(),
        message: VERIFIED_MESSAGE.to_string(),
    }))
}
