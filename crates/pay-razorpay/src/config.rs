//! # Razorpay Configuration
//!
//! Credentials and endpoint for the Razorpay REST API.
//! Values are supplied by the application settings, never read here.

use std::fmt;

/// Default Razorpay API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.razorpay.com";

/// Razorpay API configuration
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Public key ID (rzp_test_... or rzp_live_...), safe to hand to clients
    pub key_id: String,

    /// Key secret, used for basic auth and checkout signatures
    pub key_secret: String,

    /// Webhook signing secret
    pub webhook_secret: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,
}

impl RazorpayConfig {
    /// Create config from a key pair
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            webhook_secret: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// True when both halves of the key pair are present
    pub fn is_configured(&self) -> bool {
        !self.key_id.is_empty() && !self.key_secret.is_empty()
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.key_id.starts_with("rzp_test_")
    }

    /// Builder: set webhook signing secret
    pub fn with_webhook_secret(mut self, secret: impl Into<String>) -> Self {
        self.webhook_secret = secret.into();
        self
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

impl fmt::Debug for RazorpayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RazorpayConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .field("webhook_secret", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_configured() {
        assert!(RazorpayConfig::new("rzp_test_abc", "secret").is_configured());
        assert!(!RazorpayConfig::new("", "secret").is_configured());
        assert!(!RazorpayConfig::new("rzp_test_abc", "").is_configured());
    }

    #[test]
    fn test_mode() {
        assert!(RazorpayConfig::new("rzp_test_abc", "s").is_test_mode());
        assert!(!RazorpayConfig::new("rzp_live_abc", "s").is_test_mode());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = RazorpayConfig::new("k", "s").with_api_base_url("http://127.0.0.1:9000/");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = RazorpayConfig::new("rzp_test_abc", "topsecret").with_webhook_secret("whsec");
        let debug = format!("{:?}", config);
        assert!(debug.contains("rzp_test_abc"));
        assert!(!debug.contains("topsecret"));
        assert!(!debug.contains("whsec"));
    }
}
