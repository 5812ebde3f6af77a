//! # pay-core
//!
//! Core types and traits for the institute payments gateway.
//!
//! This crate provides:
//! - `PaymentGateway` trait for implementing payment providers
//! - `DatabaseClient` trait for the managed database service
//! - `NewOrder`, `ProviderOrder`, and `PaymentConfirmation` for the checkout flow
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{NewOrder, PaymentConfirmation, PaymentGateway};
//!
//! // Create an order for a plan (amount in paise)
//! let order = gateway.create_order(&NewOrder::for_plan("yearly", 50000)).await?;
//!
//! // Later, check the tokens returned by the provider's checkout
//! gateway.verify_payment_signature(&PaymentConfirmation::new(payment_id, order.id, signature))?;
//! ```

pub mod database;
pub mod error;
pub mod gateway;
pub mod order;

// Re-exports for convenience
pub use database::{BoxedDatabaseClient, DatabaseClient};
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use order::{Currency, NewOrder, PaymentConfirmation, ProviderOrder, RECEIPT_PREFIX};
