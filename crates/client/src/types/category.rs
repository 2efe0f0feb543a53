//! Category wire types.

use chrono::{DateTime, Utc};
use marigold_core::CategoryId;
use serde::{Deserialize, Serialize};

/// A category row as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Number of products in the category; only some list queries compute it.
    #[serde(default)]
    pub product_count: Option<i64>,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Partial category update; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_without_product_count() {
        let category: Category = serde_json::from_value(json!({
            "id": "0a6f3b9c-2d1e-4f5a-9b8c-7d6e5f4a3b2c",
            "name": "Tea",
            "description": null,
            "slug": "tea",
            "image_url": null,
            "is_active": true,
            "created_at": "2026-01-12T08:30:00Z",
            "updated_at": "2026-01-12T08:30:00Z"
        }))
        .unwrap();

        assert_eq!(category.slug.as_deref(), Some("tea"));
        assert!(category.product_count.is_none());
    }

    #[test]
    fn test_new_category_wire_names() {
        let payload = NewCategory {
            name: "Spices".to_owned(),
            description: None,
            slug: Some("spices".to_owned()),
            image_url: Some("/images/spices.jpg".to_owned()),
            is_active: Some(true),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Spices",
                "slug": "spices",
                "imageUrl": "/images/spices.jpg",
                "isActive": true
            })
        );
    }
}
