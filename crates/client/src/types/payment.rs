//! Payment wire types.

use chrono::{DateTime, Utc};
use marigold_core::{OrderId, PaymentId, PaymentStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment row as the backend returns it.
///
/// Read-only from the admin side; payments are written by the checkout and
/// provider webhooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub order_id: OrderId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// ISO 4217 code, "INR" in practice.
    pub currency: String,
    pub payment_method: String,
    /// Provider-side intent reference, when the method has one.
    pub payment_intent_id: Option<String>,
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
