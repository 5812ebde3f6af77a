//! # Supabase Client
//!
//! Thin PostgREST client authenticated with the service-role key.

use crate::config::SupabaseConfig;
use async_trait::async_trait;
use pay_core::{DatabaseClient, PaymentError, PaymentResult};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Supabase database client
pub struct SupabaseClient {
    config: SupabaseConfig,
    client: Client,
}

impl SupabaseClient {
    /// Create a new client for the given project
    pub fn new(config: SupabaseConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Project URL this client is bound to
    pub fn project_url(&self) -> &str {
        self.config.url.as_str()
    }
}

#[async_trait]
impl DatabaseClient for SupabaseClient {
    #[instrument(skip(self, patch))]
    async fn update(
        &self,
        table: &str,
        column: &str,
        value: &str,
        patch: serde_json::Value,
    ) -> PaymentResult<()> {
        let url = self.config.rest_url(table);
        let filter = format!("eq.{}", value);

        let response = self
            .client
            .patch(&url)
            .query(&[(column, filter.as_str())])
            .header("apikey", &self.config.service_role_key)
            .header("Authorization", self.config.auth_header())
            .header("Prefer", "return=minimal")
            .json(&patch)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Supabase update failed: status={}, body={}", status, body);
            return Err(PaymentError::Database(format!("HTTP {}: {}", status, body)));
        }

        debug!("Updated {} where {}={}", table, column, value);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "supabase"
    }
}
