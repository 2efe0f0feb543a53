//! Authentication wire types.

use serde::{Deserialize, Serialize};

use super::User;

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    /// Bearer token for subsequent requests. [`crate::ApiClient::login`]
    /// persists it before returning.
    pub token: String,
}
