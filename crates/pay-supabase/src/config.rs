//! # Supabase Configuration
//!
//! Project URL and service-role key for the hosted database.

use pay_core::{PaymentError, PaymentResult};
use reqwest::Url;
use std::fmt;

/// Supabase project configuration
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project URL (https://<ref>.supabase.co)
    pub url: Url,

    /// Service-role key; server-only, bypasses row-level security
    pub service_role_key: String,
}

impl SupabaseConfig {
    /// Validate and build a config.
    ///
    /// The URL must be absolute http(s) and the key must be non-empty.
    pub fn new(url: &str, service_role_key: impl Into<String>) -> PaymentResult<Self> {
        let url = Url::parse(url).map_err(|e| {
            PaymentError::Configuration(format!("SUPABASE_URL is not a valid URL: {}", e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(PaymentError::Configuration(format!(
                "SUPABASE_URL must use http or https, got {}",
                url.scheme()
            )));
        }

        let service_role_key = service_role_key.into();
        if service_role_key.is_empty() {
            return Err(PaymentError::Configuration(
                "SUPABASE_SERVICE_ROLE_KEY is empty".to_string(),
            ));
        }

        Ok(Self {
            url,
            service_role_key,
        })
    }

    /// PostgREST endpoint for a table
    pub fn rest_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.url.as_str().trim_end_matches('/'),
            table
        )
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.service_role_key)
    }
}

impl fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url.as_str())
            .field("service_role_key", &"<redacted>")
            .finish()
    }
}
