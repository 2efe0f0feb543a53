//! Product CRUD operations.

use serde_json::Value;
use tracing::instrument;
use url::form_urlencoded;

use marigold_core::ProductId;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{NewProduct, Product, ProductPatch};

/// Filters for `GET /products`.
///
/// Rendered as query parameters; unset fields are omitted entirely, so a
/// default filter produces a bare `/products` request.
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    /// Filter by category name.
    pub category: Option<String>,
    /// Filter by active status.
    pub is_active: Option<bool>,
    /// Search in name and description.
    pub search: Option<String>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Pagination offset.
    pub offset: Option<u32>,
}

impl ProductFilters {
    /// Render as a `?`-prefixed query string, or empty when nothing is set.
    #[must_use]
    pub fn query(&self) -> String {
        let mut pairs = form_urlencoded::Serializer::new(String::new());
        if let Some(category) = &self.category {
            pairs.append_pair("category", category);
        }
        if let Some(is_active) = self.is_active {
            pairs.append_pair("isActive", if is_active { "true" } else { "false" });
        }
        if let Some(search) = &self.search {
            pairs.append_pair("search", search);
        }
        if let Some(limit) = self.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
        if let Some(offset) = self.offset {
            pairs.append_pair("offset", &offset.to_string());
        }

        let encoded = pairs.finish();
        if encoded.is_empty() {
            String::new()
        } else {
            format!("?{encoded}")
        }
    }
}

impl ApiClient {
    /// List products, optionally filtered, searched, and paginated.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self))]
    pub async fn list_products(&self, filters: &ProductFilters) -> Result<Vec<Product>, ApiError> {
        self.get(&format!("/products{}", filters.query())).await
    }

    /// Fetch a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product does not exist.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.get(&format!("/products/{id}")).await
    }

    /// Create a product. Requires an admin token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or validation rejects the
    /// payload.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        self.post("/products", product).await
    }

    /// Partially update a product; only set fields are sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or validation rejects the
    /// patch.
    #[instrument(skip(self, patch))]
    pub async fn update_product(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, ApiError> {
        self.put(&format!("/products/{id}"), patch).await
    }

    /// Delete a product permanently.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product does not exist.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let _: Value = self.delete(&format!("/products/{id}")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_produce_no_query() {
        assert_eq!(ProductFilters::default().query(), "");
    }

    #[test]
    fn test_all_filters_render_in_order() {
        let filters = ProductFilters {
            category: Some("Tea".to_owned()),
            is_active: Some(true),
            search: Some("green tea".to_owned()),
            limit: Some(25),
            offset: Some(50),
        };
        assert_eq!(
            filters.query(),
            "?category=Tea&isActive=true&search=green+tea&limit=25&offset=50"
        );
    }

    #[test]
    fn test_partial_filters_skip_unset_fields() {
        let filters = ProductFilters {
            is_active: Some(false),
            ..ProductFilters::default()
        };
        assert_eq!(filters.query(), "?isActive=false");
    }

    #[test]
    fn test_search_is_url_encoded() {
        let filters = ProductFilters {
            search: Some("chai & spice".to_owned()),
            ..ProductFilters::default()
        };
        assert_eq!(filters.query(), "?search=chai+%26+spice");
    }
}
