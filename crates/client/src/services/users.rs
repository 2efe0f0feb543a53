//! User read operations.

use tracing::instrument;

use marigold_core::UserId;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::User;

impl ApiClient {
    /// List all user accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/users").await
    }

    /// Fetch a single user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user does not exist.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, ApiError> {
        self.get(&format!("/users/{id}")).await
    }
}
