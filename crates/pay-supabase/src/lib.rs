//! # pay-supabase
//!
//! Supabase database client for the institute payments gateway.
//!
//! The client talks to the project's PostgREST endpoint with the
//! service-role key. It is built once at startup and shared across requests.
//!
//! ```rust,ignore
//! use pay_supabase::{SupabaseClient, SupabaseConfig};
//!
//! let config = SupabaseConfig::new("https://abc.supabase.co", service_role_key)?;
//! let db = SupabaseClient::new(config)?;
//! ```

pub mod client;
pub mod config;

pub use client::SupabaseClient;
pub use config::SupabaseConfig;
