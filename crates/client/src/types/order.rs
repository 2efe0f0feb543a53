//! Order wire types.

use chrono::{DateTime, Utc};
use marigold_core::{OrderId, OrderItemId, OrderStatus, PaymentStatus, ProductId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An order row as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Order total in INR.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
    /// Address document; shape is owned by the checkout flow.
    pub shipping_address: serde_json::Value,
    pub billing_address: serde_json::Value,
    pub payment_status: PaymentStatus,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A line item belonging to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i64,
    /// Unit price at purchase time.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    /// Product slice joined in by the detail query.
    #[serde(default)]
    pub product: Option<ProductSummary>,
}

/// The slice of product data embedded in an order item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub image_url: Option<String>,
}

/// An order with its line items, as `GET /orders/:id` returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    #[serde(default)]
    pub items: Option<Vec<OrderItem>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_row() -> serde_json::Value {
        json!({
            "id": "5c3f8a1b-9d2e-4c7f-8a6b-1e2d3c4b5a69",
            "user_id": "7be5e528-7ae4-4c8e-8a42-0a8d3f4a7a21",
            "total_amount": 1248.0,
            "status": "processing",
            "shipping_address": { "city": "Kochi", "pincode": "682001" },
            "billing_address": { "city": "Kochi", "pincode": "682001" },
            "payment_status": "paid",
            "payment_method": "upi",
            "created_at": "2026-02-03T12:15:00Z",
            "updated_at": "2026-02-03T12:20:00Z"
        })
    }

    #[test]
    fn test_order_deserializes_backend_row() {
        let order: Order = serde_json::from_value(order_row()).unwrap();
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.payment_status, PaymentStatus::Paid);
        assert_eq!(order.shipping_address["city"], "Kochi");
    }

    #[test]
    fn test_order_with_items_flattens_order_fields() {
        let mut row = order_row();
        row["items"] = json!([{
            "id": "e1d2c3b4-a596-4877-b8c9-d0e1f2a3b4c5",
            "order_id": "5c3f8a1b-9d2e-4c7f-8a6b-1e2d3c4b5a69",
            "product_id": "7be5e528-7ae4-4c8e-8a42-0a8d3f4a7a21",
            "quantity": 2,
            "price": 624.0,
            "created_at": "2026-02-03T12:15:00Z",
            "product": {
                "id": "7be5e528-7ae4-4c8e-8a42-0a8d3f4a7a21",
                "name": "Assam Gold Loose Leaf",
                "image_url": null
            }
        }]);

        let detail: OrderWithItems = serde_json::from_value(row).unwrap();
        let items = detail.items.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(
            items[0].product.as_ref().unwrap().name,
            "Assam Gold Loose Leaf"
        );
    }

    #[test]
    fn test_order_detail_without_items() {
        let detail: OrderWithItems = serde_json::from_value(order_row()).unwrap();
        assert!(detail.items.is_none());
        assert_eq!(detail.order.payment_method, "upi");
    }
}
