//! # Payment Gateway Trait
//!
//! Seam between the HTTP layer and a payment provider.
//! Implementations: Razorpay.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   PaymentGateway (trait)                    │
//! │  ├── create_order()                                         │
//! │  ├── verify_payment_signature()                             │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                    ┌───────┴───────┐
//!                    │RazorpayGateway│
//!                    └───────────────┘
//! ```

use crate::error::PaymentResult;
use crate::order::{NewOrder, PaymentConfirmation, ProviderOrder};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment provider implementations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order on the provider side.
    ///
    /// # Arguments
    /// * `order` - Amount, currency, receipt and capture flag
    ///
    /// # Returns
    /// The provider's order record, including its assigned ID.
    async fn create_order(&self, order: &NewOrder) -> PaymentResult<ProviderOrder>;

    /// Verify the signature the provider attached to a completed checkout.
    ///
    /// Returns `PaymentError::SignatureVerificationFailed` on mismatch.
    fn verify_payment_signature(&self, confirmation: &PaymentConfirmation) -> PaymentResult<()>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
