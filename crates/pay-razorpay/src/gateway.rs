//! # Razorpay Orders
//!
//! Implementation of the Razorpay Orders API and checkout signature check.
//! An order must exist before the payer opens Razorpay's checkout.

use crate::config::RazorpayConfig;
use crate::signature;
use async_trait::async_trait;
use chrono::DateTime;
use pay_core::{
    NewOrder, PaymentConfirmation, PaymentError, PaymentGateway, PaymentResult, ProviderOrder,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

const PROVIDER: &str = "razorpay";

/// Razorpay payment gateway
pub struct RazorpayGateway {
    config: RazorpayConfig,
    client: Client,
}

impl RazorpayGateway {
    /// Create a new Razorpay gateway.
    ///
    /// Fails when either half of the key pair is empty or the HTTP client
    /// cannot be built.
    pub fn new(config: RazorpayConfig) -> PaymentResult<Self> {
        if !config.is_configured() {
            return Err(PaymentError::Configuration(
                "RAZORPAY_KEY_ID and RAZORPAY_KEY_SECRET must both be set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Public key ID this gateway authenticates with
    pub fn key_id(&self) -> &str {
        &self.config.key_id
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    #[instrument(skip(self, order), fields(amount = order.amount, receipt = %order.receipt))]
    async fn create_order(&self, order: &NewOrder) -> PaymentResult<ProviderOrder> {
        let body = RazorpayOrderRequest {
            amount: order.amount,
            currency: order.currency.as_str(),
            receipt: &order.receipt,
            payment_capture: u8::from(order.auto_capture),
        };

        debug!(
            "Creating Razorpay order: amount={} {}",
            order.amount, order.currency
        );

        let url = format!("{}/v1/orders", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&body)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Razorpay API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<RazorpayErrorResponse>(&body) {
                return Err(PaymentError::ProviderError {
                    provider: PROVIDER.to_string(),
                    message: error_response.error.description,
                });
            }

            return Err(PaymentError::ProviderError {
                provider: PROVIDER.to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let order_response: RazorpayOrderResponse = serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse Razorpay response: {}", e))
        })?;

        info!(
            "Created Razorpay order: id={}, status={}",
            order_response.id, order_response.status
        );

        Ok(ProviderOrder {
            id: order_response.id,
            amount: order_response.amount,
            currency: order_response.currency,
            receipt: order_response.receipt,
            status: order_response.status,
            created_at: order_response
                .created_at
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }

    #[instrument(skip(self, confirmation), fields(order_id = %confirmation.order_id))]
    fn verify_payment_signature(&self, confirmation: &PaymentConfirmation) -> PaymentResult<()> {
        signature::verify_payment_signature(&self.config.key_secret, confirmation)?;
        debug!("Verified Razorpay signature: payment={}", confirmation.payment_id);
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// =============================================================================
// Razorpay API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct RazorpayOrderRequest<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
    payment_capture: u8,
}

#[derive(Debug, Deserialize)]
struct RazorpayOrderResponse {
    id: String,
    amount: i64,
    currency: String,
    #[serde(default)]
    receipt: Option<String>,
    #[serde(default)]
    status: String,
    #[serde(default)]
    created_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorResponse {
    error: RazorpayError,
}

#[derive(Debug, Deserialize)]
struct RazorpayError {
    description: String,
}
