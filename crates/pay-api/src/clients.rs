//! # External Service Clients
//!
//! Factories for the database and payments clients.

use pay_core::{BoxedDatabaseClient, BoxedPaymentGateway, PaymentResult};
use pay_razorpay::{RazorpayConfig, RazorpayGateway};
use pay_supabase::{SupabaseClient, SupabaseConfig};
use std::sync::Arc;
use tracing::{info, warn};

/// Build the database client.
///
/// Called eagerly at startup, so a malformed URL or missing key is fatal.
pub fn make_database_client(url: &str, service_key: &str) -> PaymentResult<BoxedDatabaseClient> {
    let config = SupabaseConfig::new(url, service_key)?;
    let client = SupabaseClient::new(config)?;
    info!("Database client ready: {}", client.project_url());
    Ok(Arc::new(client))
}

/// Build the payments client, or `None` when payments cannot be enabled.
///
/// Missing credentials are a valid deployment state; the failure is logged
/// and the payment endpoints answer with 500 until an operator fixes it.
pub fn make_payments_client(config: RazorpayConfig) -> Option<BoxedPaymentGateway> {
    let test_mode = config.is_test_mode();
    match RazorpayGateway::new(config) {
        Ok(gateway) => {
            info!(
                "Razorpay client ready: key_id={}, test_mode={}",
                gateway.key_id(),
                test_mode
            );
            Some(Arc::new(gateway))
        }
        Err(e) => {
            warn!("Razorpay client failed to initialize, payments disabled: {}", e);
            None
        }
    }
}
