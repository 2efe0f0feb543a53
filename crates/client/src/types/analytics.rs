//! Analytics wire types.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregates for the dashboard landing page.
///
/// Unlike entity rows, the reporting endpoints answer in camelCase.
/// `recent_orders` and `top_products` are reporting-query projections with
/// no stable schema, so they stay untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    pub total_orders: i64,
    pub total_products: i64,
    pub total_users: i64,
    pub pending_orders: i64,
    pub low_stock_products: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_order_value: Decimal,
    pub orders_by_status: HashMap<String, i64>,
    pub recent_orders: Vec<serde_json::Value>,
    pub top_products: Vec<serde_json::Value>,
}
