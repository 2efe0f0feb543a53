//! Product wire types.

use chrono::{DateTime, Utc};
use marigold_core::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product row as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long description.
    pub description: Option<String>,
    /// Selling price in INR.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Original price when discounted.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub compare_at_price: Option<Decimal>,
    /// Stock-keeping unit.
    pub sku: Option<String>,
    /// Units on hand.
    pub stock_quantity: i64,
    /// Primary image URL.
    pub image_url: Option<String>,
    /// Additional image URLs.
    pub images: Option<Vec<String>>,
    /// Category name (not an ID - the backend denormalizes it).
    pub category: Option<String>,
    /// Free-form tags.
    pub tags: Option<Vec<String>>,
    /// Whether the product is visible on the storefront.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a product.
///
/// Only `name` and `price` are required; everything else falls back to
/// backend defaults.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub compare_at_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Partial product update; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub compare_at_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_deserializes_backend_row() {
        let product: Product = serde_json::from_value(json!({
            "id": "7be5e528-7ae4-4c8e-8a42-0a8d3f4a7a21",
            "name": "Assam Gold Loose Leaf",
            "description": "Second flush, malty.",
            "price": 449.0,
            "compare_at_price": 549.0,
            "sku": "TEA-ASM-250",
            "stock_quantity": 120,
            "image_url": "/images/assam-gold.jpg",
            "images": ["/images/assam-gold.jpg"],
            "category": "Tea",
            "tags": ["assam", "black"],
            "is_active": true,
            "created_at": "2026-01-12T08:30:00Z",
            "updated_at": "2026-02-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(product.name, "Assam Gold Loose Leaf");
        assert_eq!(product.price, "449".parse().unwrap());
        assert_eq!(product.stock_quantity, 120);
    }

    #[test]
    fn test_new_product_skips_unset_fields_and_uses_camel_case() {
        let payload = NewProduct {
            name: "Nilgiri Frost".to_owned(),
            description: None,
            price: "325.50".parse().unwrap(),
            compare_at_price: None,
            sku: None,
            stock_quantity: Some(40),
            image_url: None,
            images: None,
            category: Some("Tea".to_owned()),
            tags: None,
            is_active: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Nilgiri Frost",
                "price": 325.5,
                "stockQuantity": 40,
                "category": "Tea"
            })
        );
    }

    #[test]
    fn test_empty_patch_serializes_to_empty_object() {
        let value = serde_json::to_value(ProductPatch::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
