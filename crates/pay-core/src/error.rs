//! # Payment Error Types
//!
//! Typed error handling for the payments gateway.
//! All provider and database operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment and persistence operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, malformed URLs)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Payment provider rejected the call
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Checkout signature did not match the expected HMAC
    #[error("{0}")]
    SignatureVerificationFailed(String),

    /// Database service error
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Returns true if this error came from a signature check
    pub fn is_signature_failure(&self) -> bool {
        matches!(self, PaymentError::SignatureVerificationFailed(_))
    }

    /// Human-readable detail suitable for an API error body.
    ///
    /// Provider rejections yield the provider's own message without the
    /// `Provider error [...]` prefix.
    pub fn detail(&self) -> String {
        match self {
            PaymentError::ProviderError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
