//! Order operations.
//!
//! Orders are created by the storefront checkout; the admin side only reads
//! them and moves them through the fulfillment statuses.

use serde::Serialize;
use tracing::instrument;

use marigold_core::{OrderId, OrderStatus};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Order, OrderWithItems};

#[derive(Serialize)]
struct StatusUpdate {
    status: OrderStatus,
}

impl ApiClient {
    /// List all orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("/orders").await
    }

    /// Fetch a single order with its line items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order does not exist.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<OrderWithItems, ApiError> {
        self.get(&format!("/orders/{id}")).await
    }

    /// Move an order to a new status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the
    /// transition.
    #[instrument(skip(self), fields(status = %status))]
    pub async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.put(&format!("/orders/{id}/status"), &StatusUpdate { status })
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_update_body_shape() {
        let body = serde_json::to_value(StatusUpdate {
            status: OrderStatus::Shipped,
        })
        .unwrap();
        assert_eq!(body, json!({ "status": "shipped" }));
    }
}
