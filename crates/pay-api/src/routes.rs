//! # Routes
//!
//! Axum router configuration for the payment API.

use crate::handlers;
use crate::openapi;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;
use utoipa_swagger_ui::SwaggerUi;

/// Prefix the payment routes are mounted under
pub const PAYMENTS_PREFIX: &str = "/api/payments";

/// Create the main application router
///
/// Routes:
/// - GET  / - Welcome message
/// - GET  /health - Health check
/// - POST /api/payments/create-order - Create a Razorpay order
/// - POST /api/payments/verify - Verify a completed checkout
/// - GET  {API_V1_STR}/openapi.json - OpenAPI document
/// - GET  /docs - Swagger UI
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.allowed_origins);
    let docs = SwaggerUi::new(openapi::DOCS_PATH).url(
        openapi::openapi_json_path(&state.settings),
        openapi::api_doc(&state.settings),
    );

    let payment_routes = Router::new()
        .route("/create-order", post(handlers::create_order))
        .route("/verify", post(handlers::verify_payment));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest(PAYMENTS_PREFIX, payment_routes)
        .merge(docs)
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        // State
        .with_state(state)
}

/// Build the CORS layer for the configured origins.
///
/// Credentials are allowed, so a literal wildcard is not permitted; a `"*"`
/// entry mirrors the request origin instead. Methods and headers always
/// mirror the request.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Skipping invalid CORS origin: {:?}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::handlers::{OrderResponse, VerifyPaymentResponse, VERIFIED_MESSAGE};
    use async_trait::async_trait;
    use axum::http::header::{
        ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, ORIGIN,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use pay_core::{
        DatabaseClient, NewOrder, PaymentConfirmation, PaymentError, PaymentGateway,
        PaymentResult, ProviderOrder,
    };
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const KEY_ID: &str = "rzp_test_public";
    const KEY_SECRET: &str = "rzp_test_secret_do_not_leak";

    /// Gateway fake: records orders, accepts one signature
    #[derive(Default)]
    struct FakeGateway {
        orders: Mutex<Vec<NewOrder>>,
        reject_with: Option<String>,
    }

    #[async_trait]
    impl PaymentGateway for FakeGateway {
        async fn create_order(&self, order: &NewOrder) -> PaymentResult<ProviderOrder> {
            if let Some(message) = &self.reject_with {
                return Err(PaymentError::ProviderError {
                    provider: "fake".into(),
                    message: message.clone(),
                });
            }
            self.orders.lock().unwrap().push(order.clone());
            Ok(ProviderOrder {
                id: "order_fake123".into(),
                amount: order.amount,
                currency: order.currency.as_str().into(),
                receipt: Some(order.receipt.clone()),
                status: "created".into(),
                created_at: None,
            })
        }

        fn verify_payment_signature(&self, c: &PaymentConfirmation) -> PaymentResult<()> {
            match c.signature.as_str() {
                "good" => Ok(()),
                "boom" => Err(PaymentError::Serialization("unexpected payload".into())),
                _ => Err(PaymentError::SignatureVerificationFailed("mismatch".into())),
            }
        }

        fn provider_name(&self) -> &'static str {
            "fake"
        }
    }

    /// Database fake: counts writes
    #[derive(Default)]
    struct RecordingDatabase {
        updates: AtomicUsize,
    }

    #[async_trait]
    impl DatabaseClient for RecordingDatabase {
        async fn update(&self, _: &str, _: &str, _: &str, _: Value) -> PaymentResult<()> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn backend_name(&self) -> &'static str {
            "recording"
        }
    }

    fn settings() -> Settings {
        Settings::from_lookup(|key| match key {
            "SUPABASE_URL" => Some("https://abc.supabase.co".into()),
            "SUPABASE_SERVICE_ROLE_KEY" => Some("service_key".into()),
            "RAZORPAY_KEY_ID" => Some(KEY_ID.into()),
            "RAZORPAY_KEY_SECRET" => Some(KEY_SECRET.into()),
            "ENVIRONMENT" => Some("staging".into()),
            _ => None,
        })
        .unwrap()
    }

    fn server(
        gateway: Option<Arc<FakeGateway>>,
        database: Arc<RecordingDatabase>,
    ) -> TestServer {
        let payments = gateway.map(|g| g as pay_core::BoxedPaymentGateway);
        let state = AppState::with_clients(settings(), payments, database);
        TestServer::new(create_router(state)).unwrap()
    }

    fn configured() -> (TestServer, Arc<FakeGateway>, Arc<RecordingDatabase>) {
        let gateway = Arc::new(FakeGateway::default());
        let database = Arc::new(RecordingDatabase::default());
        (
            server(Some(gateway.clone()), database.clone()),
            gateway,
            database,
        )
    }

    fn verify_body(signature: &str) -> Value {
        json!({
            "razorpay_payment_id": "pay_123",
            "razorpay_order_id": "order_123",
            "razorpay_signature": signature
        })
    }

    #[tokio::test]
    async fn test_root() {
        let (server, _, _) = configured();
        let response = server.get("/").await;

        response.assert_status_ok();
        response.assert_json(&json!({"message": "Welcome to Institute Management API"}));
    }

    #[tokio::test]
    async fn test_health_is_stable() {
        let (server, _, _) = configured();
        let first = server.get("/health").await;
        let second = server.get("/health").await;

        first.assert_status_ok();
        first.assert_json(&json!({"status": "healthy", "environment": "staging"}));
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[tokio::test]
    async fn test_create_order() {
        let (server, gateway, _) = configured();
        let response = server
            .post("/api/payments/create-order")
            .json(&json!({"amount": 50000, "plan_type": "yearly"}))
            .await;

        response.assert_status_ok();
        let body: OrderResponse = response.json();
        assert_eq!(
            body,
            OrderResponse {
                id: "order_fake123".into(),
                currency: "INR".into(),
                amount: 50000,
                key_id: KEY_ID.into(),
            }
        );
        assert!(!response.text().contains(KEY_SECRET));

        let orders = gateway.orders.lock().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].receipt, "rcpt_yearly");
        assert!(orders[0].auto_capture);
    }

    #[tokio::test]
    async fn test_create_order_default_plan() {
        let (server, gateway, _) = configured();
        server
            .post("/api/payments/create-order")
            .json(&json!({"amount": 1000}))
            .await
            .assert_status_ok();

        assert_eq!(gateway.orders.lock().unwrap()[0].receipt, "rcpt_monthly");
    }

    #[tokio::test]
    async fn test_create_order_provider_rejection() {
        let gateway = Arc::new(FakeGateway {
            reject_with: Some("Order amount less than minimum amount allowed".into()),
            ..Default::default()
        });
        let server = server(Some(gateway), Arc::new(RecordingDatabase::default()));

        let response = server
            .post("/api/payments/create-order")
            .json(&json!({"amount": 10}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({"detail": "Order amount less than minimum amount allowed"}));
    }

    #[tokio::test]
    async fn test_payments_not_configured() {
        let server = server(None, Arc::new(RecordingDatabase::default()));

        let response = server
            .post("/api/payments/create-order")
            .json(&json!({"amount": 50000}))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({"detail": "Razorpay is not configured on the server."}));

        let response = server.post("/api/payments/verify").json(&verify_body("good")).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({"detail": "Razorpay not configured"}));
    }

    #[tokio::test]
    async fn test_verify_success_has_no_side_effects() {
        let (server, _, database) = configured();
        let response = server.post("/api/payments/verify").json(&verify_body("good")).await;

        response.assert_status_ok();
        let body: VerifyPaymentResponse = response.json();
        assert_eq!(body.status, "success");
        assert_eq!(body.message, VERIFIED_MESSAGE);
        assert_eq!(database.updates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_verify_invalid_signature() {
        let (server, _, database) = configured();
        let response = server.post("/api/payments/verify").json(&verify_body("forged")).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({"detail": "Invalid Signature"}));
        assert_eq!(database.updates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_verify_other_failure() {
        let (server, _, _) = configured();
        let response = server.post("/api/payments/verify").json(&verify_body("boom")).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({"detail": "Serialization error: unexpected payload"}));
    }

    #[tokio::test]
    async fn test_create_order_missing_amount_is_json_error() {
        let (server, gateway, _) = configured();
        let response = server
            .post("/api/payments/create-order")
            .json(&json!({"plan_type": "yearly"}))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.contains("amount"), "{}", detail);
        assert!(gateway.orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_order_rejects_non_integer_amount() {
        let (server, gateway, _) = configured();
        for amount in [json!(1000.0), json!(1000.5), json!("1000")] {
            let response = server
                .post("/api/payments/create-order")
                .json(&json!({"amount": amount}))
                .await;

            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
            let body: Value = response.json();
            assert!(body["detail"].is_string());
        }
        assert!(gateway.orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_verify_non_json_body_is_json_error() {
        let (server, _, database) = configured();
        let response = server
            .post("/api/payments/verify")
            .text("not json")
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.header(CONTENT_TYPE), "application/json");
        let body: Value = response.json();
        assert!(body["detail"].is_string());
        assert_eq!(database.updates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_verify_invalid_json_syntax() {
        let (server, _, _) = configured();
        let response = server
            .post("/api/payments/verify")
            .content_type("application/json")
            .bytes(r#"{"razorpay_payment_id": "#.into())
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let (server, _, _) = configured();
        let response = server.get("/api/v1/openapi.json").await;

        response.assert_status_ok();
        let doc: Value = response.json();
        assert_eq!(doc["info"]["title"], "Institute Management API");
        assert!(doc["paths"]["/api/payments/create-order"]["post"].is_object());
        assert!(doc["paths"]["/api/payments/verify"]["post"].is_object());
        assert!(doc["paths"]["/health"]["get"].is_object());
    }

    #[tokio::test]
    async fn test_swagger_ui_served() {
        let (server, _, _) = configured();
        let response = server.get("/docs/").await;

        response.assert_status_ok();
        assert!(response.text().contains("swagger"));
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let (server, _, _) = configured();
        let response = server
            .get("/health")
            .add_header(ORIGIN, HeaderValue::from_static("http://localhost:3000"))
            .await;

        assert_eq!(
            response.header(ACCESS_CONTROL_ALLOW_ORIGIN),
            "http://localhost:3000"
        );
        assert_eq!(response.header(ACCESS_CONTROL_ALLOW_CREDENTIALS), "true");
    }

    #[tokio::test]
    async fn test_cors_rejects_unknown_origin() {
        let (server, _, _) = configured();
        let response = server
            .get("/health")
            .add_header(ORIGIN, HeaderValue::from_static("https://evil.example"))
            .await;

        assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
