//! # Application State
//!
//! Shared state for the Axum application.
//! Contains settings, the optional payments client, and the database client.

use crate::clients::{make_database_client, make_payments_client};
use crate::config::Settings;
use pay_core::{BoxedDatabaseClient, BoxedPaymentGateway};
use pay_razorpay::RazorpayConfig;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application settings
    pub settings: Arc<Settings>,
    /// Payments client; `None` when Razorpay credentials are missing
    pub payments: Option<BoxedPaymentGateway>,
    /// Database client (shared read-only)
    pub database: BoxedDatabaseClient,
}

impl AppState {
    /// Build the clients described by `settings`.
    ///
    /// Fails only when the database client cannot be constructed.
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let database =
            make_database_client(&settings.supabase_url, &settings.supabase_service_role_key)
                .map_err(|e| anyhow::anyhow!("Failed to initialize database client: {}", e))?;

        let payments = make_payments_client(
            RazorpayConfig::new(&settings.razorpay_key_id, &settings.razorpay_key_secret)
                .with_webhook_secret(&settings.razorpay_webhook_secret)
                .with_api_base_url(&settings.razorpay_api_base_url),
        );

        Ok(Self::with_clients(settings, payments, database))
    }

    /// Assemble state from already-built clients
    pub fn with_clients(
        settings: Settings,
        payments: Option<BoxedPaymentGateway>,
        database: BoxedDatabaseClient,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            payments,
            database,
        }
    }

    /// Public Razorpay key handed to checkout clients
    pub fn public_key_id(&self) -> &str {
        &self.settings.razorpay_key_id
    }
}
