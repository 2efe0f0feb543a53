//! Authentication operations.
//!
//! Login, current-user lookup, and logout. The bearer token obtained here is
//! persisted through [`crate::TokenStore`] so later invocations stay
//! authenticated.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::instrument;

use marigold_core::Email;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{AuthResponse, User};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Log in with email and password.
    ///
    /// On success the returned token is stored - in memory and in the token
    /// file - so subsequent requests are authenticated.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid credentials, transport failure, or a
    /// token file that cannot be written.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(
        &self,
        email: &Email,
        password: &SecretString,
    ) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .post(
                "/auth/login",
                &LoginRequest {
                    email: email.as_str(),
                    password: password.expose_secret(),
                },
            )
            .await?;

        self.set_token(Some(SecretString::from(response.token.clone())))
            .await?;

        Ok(response)
    }

    /// Fetch the currently authenticated user.
    ///
    /// A 401 means the stored token is stale; it is cleared before the error
    /// propagates so the next attempt starts logged out.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no valid session exists.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<User, ApiError> {
        let result = self.get::<User>("/auth/me").await;

        if let Err(ApiError::Api { status: 401, .. }) = &result {
            self.set_token(None).await?;
        }

        result
    }

    /// Log out: clear the token from memory and the token file.
    ///
    /// # Errors
    ///
    /// Returns an error if the token file cannot be removed.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.set_token(None).await
    }
}
