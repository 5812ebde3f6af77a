//! # Database Client Trait
//!
//! Seam for the managed database service. The gateway builds a client at
//! startup and shares it read-only across requests.

use crate::error::PaymentResult;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Patch every row of `table` whose `column` equals `value`.
    async fn update(
        &self,
        table: &str,
        column: &str,
        value: &str,
        patch: serde_json::Value,
    ) -> PaymentResult<()>;

    /// Backend name (for logging).
    fn backend_name(&self) -> &'static str;
}

/// Type alias for a shared database client
pub type BoxedDatabaseClient = Arc<dyn DatabaseClient>;
