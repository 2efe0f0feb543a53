//! Payment read operations.
//!
//! Payments live under `/admin/payments` on the backend and are read-only
//! here; the checkout and provider webhooks write them.

use tracing::instrument;

use marigold_core::{OrderId, PaymentId};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::Payment;

impl ApiClient {
    /// List all payments.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.get("/admin/payments").await
    }

    /// Fetch a single payment by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payment does not exist.
    #[instrument(skip(self))]
    pub async fn get_payment(&self, id: PaymentId) -> Result<Payment, ApiError> {
        self.get(&format!("/admin/payments/{id}")).await
    }

    /// List the payments recorded against one order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn payments_for_order(&self, order_id: OrderId) -> Result<Vec<Payment>, ApiError> {
        self.get(&format!("/admin/payments/order/{order_id}")).await
    }
}
