//! # API Errors
//!
//! The closed set of failures a payment endpoint can return, and the single
//! translation from `PaymentError` into that set.

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pay_core::PaymentError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Detail returned when a checkout signature does not match
pub const INVALID_SIGNATURE: &str = "Invalid Signature";

/// Error returned by the payment endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payments client was not constructed at startup
    #[error("{0}")]
    PaymentsUnavailable(String),

    /// Bad request data or provider rejection
    #[error("{0}")]
    ClientError(String),

    /// Checkout signature mismatch
    #[error("Invalid Signature")]
    SignatureInvalid,

    /// Request body missing, not JSON, or the wrong shape
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::PaymentsUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ClientError(_) | ApiError::SignatureInvalid => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        if err.is_signature_failure() {
            ApiError::SignatureInvalid
        } else {
            ApiError::ClientError(err.detail())
        }
    }
}

/// `Json` extractor whose rejections use the `{"detail": ...}` body
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
