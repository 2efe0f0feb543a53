//! Category CRUD operations.

use serde_json::Value;
use tracing::instrument;

use marigold_core::CategoryId;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Category, CategoryPatch, NewCategory};

impl ApiClient {
    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories").await
    }

    /// Fetch a single category by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the category does not exist.
    #[instrument(skip(self))]
    pub async fn get_category(&self, id: CategoryId) -> Result<Category, ApiError> {
        self.get(&format!("/categories/{id}")).await
    }

    /// Create a category. Requires an admin token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or validation rejects the
    /// payload.
    #[instrument(skip(self, category), fields(name = %category.name))]
    pub async fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        self.post("/categories", category).await
    }

    /// Partially update a category; only set fields are sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or validation rejects the
    /// patch.
    #[instrument(skip(self, patch))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        patch: &CategoryPatch,
    ) -> Result<Category, ApiError> {
        self.put(&format!("/categories/{id}"), patch).await
    }

    /// Delete a category permanently.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the category does not exist.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), ApiError> {
        let _: Value = self.delete(&format!("/categories/{id}")).await?;
        Ok(())
    }
}
