//! # Order Types
//!
//! Order and payment confirmation types exchanged with the payment provider.
//! Amounts are always in the currency's minor unit (paise for INR).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Receipt prefix for orders created from a plan label
pub const RECEIPT_PREFIX: &str = "rcpt_";

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian Rupee
    #[default]
    INR,
}

impl Currency {
    /// Get the ISO 4217 code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order-creation request sent to a payment provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOrder {
    /// Amount in minor units, passed through unchanged
    pub amount: i64,

    /// Currency
    pub currency: Currency,

    /// Merchant receipt label
    pub receipt: String,

    /// Capture the payment automatically once authorized
    pub auto_capture: bool,
}

impl NewOrder {
    /// Build an INR, auto-captured order for a subscription plan label.
    ///
    /// The amount is not converted or validated; the provider decides
    /// whether it is acceptable.
    pub fn for_plan(plan_type: &str, amount: i64) -> Self {
        Self {
            amount,
            currency: Currency::INR,
            receipt: format!("{}{}", RECEIPT_PREFIX, plan_type),
            auto_capture: true,
        }
    }
}

/// An order record as returned by the payment provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOrder {
    /// Provider-assigned order ID
    pub id: String,

    /// Amount in minor units
    pub amount: i64,

    /// ISO 4217 currency code as reported by the provider
    pub currency: String,

    /// Receipt label echoed by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,

    /// Provider order status (e.g. "created")
    #[serde(default)]
    pub status: String,

    /// Creation time reported by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Tokens returned by the provider's client-side checkout once a payer
/// completes payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub payment_id: String,
    pub order_id: String,
    pub signature: String,
}

impl PaymentConfirmation {
    pub fn new(
        payment_id: impl Into<String>,
        order_id: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            payment_id: payment_id.into(),
            order_id: order_id.into(),
            signature: signature.into(),
        }
    }
}
