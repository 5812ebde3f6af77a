//! # pay-razorpay
//!
//! Razorpay payment gateway for the institute payments gateway.
//!
//! Two calls are covered:
//!
//! 1. **Orders API** - `POST /v1/orders`, authenticated with the key pair
//! 2. **Checkout signature** - local HMAC-SHA256 check of the tokens the
//!    payer's browser receives after completing checkout
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_core::{NewOrder, PaymentGateway};
//! use pay_razorpay::{RazorpayConfig, RazorpayGateway};
//!
//! let gateway = RazorpayGateway::new(RazorpayConfig::new(key_id, key_secret))?;
//!
//! // Amount in paise
//! let order = gateway.create_order(&NewOrder::for_plan("monthly", 1000)).await?;
//!
//! // Hand order.id and key_id to the client-side checkout
//! ```

pub mod config;
pub mod gateway;
pub mod signature;

// Re-exports
pub use config::{RazorpayConfig, DEFAULT_API_BASE_URL};
pub use gateway::RazorpayGateway;
pub use signature::{expected_payment_signature, verify_payment_signature, SIGNATURE_MISMATCH};
