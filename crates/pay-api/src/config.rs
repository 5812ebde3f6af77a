//! # Settings
//!
//! Process settings loaded once at startup from the environment (and a
//! `.env` file when present). Read-only afterwards; handed to the
//! components that need it rather than looked up globally.

use pay_core::{PaymentError, PaymentResult};
use std::fmt;
use std::net::{SocketAddr, ToSocketAddrs};

/// Origin allowed when `ALLOWED_ORIGINS` is unset or unparseable
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Application settings
#[derive(Clone)]
pub struct Settings {
    /// Versioned API prefix
    pub api_v1_str: String,
    /// Project display name
    pub project_name: String,
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Cross-origin hosts, in configured order
    pub allowed_origins: Vec<String>,

    /// Supabase project URL
    pub supabase_url: String,
    /// Supabase service-role key
    pub supabase_service_role_key: String,

    /// Razorpay public key ID; empty disables payments
    pub razorpay_key_id: String,
    /// Razorpay key secret; empty disables payments
    pub razorpay_key_secret: String,
    /// Razorpay webhook signing secret
    pub razorpay_webhook_secret: String,
    /// Razorpay API endpoint
    pub razorpay_api_base_url: String,
}

impl Settings {
    /// Load from `.env` and the process environment
    pub fn from_env() -> PaymentResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    ///
    /// `SUPABASE_URL` and `SUPABASE_SERVICE_ROLE_KEY` are required; every
    /// other key has a default.
    pub fn from_lookup<F>(lookup: F) -> PaymentResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let required = |key: &str| {
            lookup(key).ok_or_else(|| PaymentError::Configuration(format!("{} not set", key)))
        };

        Ok(Self {
            api_v1_str: or("API_V1_STR", "/api/v1"),
            project_name: or("PROJECT_NAME", "Institute Management API"),
            host: or("HOST", "0.0.0.0"),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(8000),
            environment: or("ENVIRONMENT", "development"),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|raw| parse_allowed_origins(&raw))
                .unwrap_or_else(default_allowed_origins),
            supabase_url: required("SUPABASE_URL")?,
            supabase_service_role_key: required("SUPABASE_SERVICE_ROLE_KEY")?,
            razorpay_key_id: or("RAZORPAY_KEY_ID", ""),
            razorpay_key_secret: or("RAZORPAY_KEY_SECRET", ""),
            razorpay_webhook_secret: or("RAZORPAY_WEBHOOK_SECRET", ""),
            razorpay_api_base_url: or("RAZORPAY_API_BASE_URL", pay_razorpay::DEFAULT_API_BASE_URL),
        })
    }

    /// Resolve the socket address to bind to
    pub fn socket_addr(&self) -> PaymentResult<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| {
                PaymentError::Configuration(format!(
                    "Invalid socket address: {}:{}",
                    self.host, self.port
                ))
            })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// True when both Razorpay credentials are present
    pub fn payments_configured(&self) -> bool {
        !self.razorpay_key_id.is_empty() && !self.razorpay_key_secret.is_empty()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_v1_str", &self.api_v1_str)
            .field("project_name", &self.project_name)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("environment", &self.environment)
            .field("allowed_origins", &self.allowed_origins)
            .field("supabase_url", &self.supabase_url)
            .field("supabase_service_role_key", &"<redacted>")
            .field("razorpay_key_id", &self.razorpay_key_id)
            .field("razorpay_key_secret", &"<redacted>")
            .field("razorpay_webhook_secret", &"<redacted>")
            .field("razorpay_api_base_url", &self.razorpay_api_base_url)
            .finish()
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec![DEFAULT_ALLOWED_ORIGIN.to_string()]
}

/// Parse `ALLOWED_ORIGINS` as a JSON array of strings.
///
/// Anything else falls back to the single default origin.
pub fn parse_allowed_origins(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw.trim()) {
        Ok(origins) => origins,
        Err(e) => {
            tracing::warn!(
                "ALLOWED_ORIGINS is not a JSON array ({}), using {}",
                e,
                DEFAULT_ALLOWED_ORIGIN
            );
            default_allowed_origins()
        }
    }
}
