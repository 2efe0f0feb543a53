//! HTTP client for the admin API.
//!
//! Wraps `reqwest` with the three behaviors every endpoint shares: bearer
//! token injection, response envelope normalization, and error mapping.
//! Requests are single-attempt - no retry, no timeout, no cancellation.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::token::TokenStore;

/// Admin API client.
///
/// Cloning is cheap (shared `Arc` inner); the client is `Send + Sync` and a
/// single instance is meant to be shared across all concurrent requests.
/// There is no coordination between them - concurrent mutations land in
/// whatever order the backend processes them.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    /// In-memory copy of the persisted token.
    token: RwLock<Option<SecretString>>,
    store: TokenStore,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Successful response body, resolved once at the HTTP boundary.
///
/// Some list endpoints wrap their payload in a `{ "data": [...] }` envelope;
/// the rest return the document directly. An object whose `data` field is
/// anything but an array is a plain document, not an envelope.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum Payload {
    Enveloped { data: Vec<Value> },
    Bare(Value),
}

impl Payload {
    fn into_value(self) -> Value {
        match self {
            Self::Enveloped { data } => Value::Array(data),
            Self::Bare(value) => value,
        }
    }
}

impl ApiClient {
    /// Create a client, loading any persisted token from the token file.
    ///
    /// # Errors
    ///
    /// Returns an error if the token file exists but cannot be read.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let store = TokenStore::new(config.token_file);
        let token = store.load()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url,
                token: RwLock::new(token),
                store,
            }),
        })
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Whether a bearer token is currently held.
    pub async fn has_token(&self) -> bool {
        self.inner.token.read().await.is_some()
    }

    /// Set or clear the bearer token, persisting the change to the token
    /// file before it takes effect in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the token file cannot be written or removed.
    pub async fn set_token(&self, token: Option<SecretString>) -> Result<(), ApiError> {
        match &token {
            Some(token) => self.inner.store.save(token)?,
            None => self.inner.store.clear()?,
        }
        *self.inner.token.write().await = token;
        Ok(())
    }

    // =========================================================================
    // Request execution
    // =========================================================================

    /// Execute a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or a body
    /// that does not deserialize into `T`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let request = self.request(Method::GET, endpoint).await;
        self.dispatch(request).await
    }

    /// Execute a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or a body
    /// that does not deserialize into `T`.
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let request = self.request(Method::POST, endpoint).await.json(body);
        self.dispatch(request).await
    }

    /// Execute a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or a body
    /// that does not deserialize into `T`.
    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let request = self.request(Method::PUT, endpoint).await.json(body);
        self.dispatch(request).await
    }

    /// Execute a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or a body
    /// that does not deserialize into `T`.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let request = self.request(Method::DELETE, endpoint).await;
        self.dispatch(request).await
    }

    /// Build a request for `endpoint`, attaching the bearer token when one
    /// is held.
    async fn request(&self, method: Method, endpoint: &str) -> reqwest::RequestBuilder {
        let url = join_endpoint(&self.inner.base_url, endpoint);
        let mut builder = self
            .inner
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.inner.token.read().await.as_ref() {
            builder = builder.bearer_auth(token.expose_secret());
        }

        builder
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|error| {
            if error.is_connect() {
                ApiError::Connect {
                    base_url: self.inner.base_url.to_string(),
                }
            } else {
                ApiError::Http(error)
            }
        })?;

        self.handle_response(response).await
    }

    /// Map a response to the caller's type, normalizing the envelope shape.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "admin API returned an error");
            return Err(status_error(status, &body));
        }

        let payload: Payload = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        serde_json::from_value(payload.into_value()).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Append an endpoint path to the base URL.
///
/// Plain concatenation, not `Url::join` - the base URL carries a path prefix
/// (`/api`) that joining against an absolute endpoint path would discard.
fn join_endpoint(base: &Url, endpoint: &str) -> String {
    format!("{}{}", base.as_str().trim_end_matches('/'), endpoint)
}

/// Build the error for a non-2xx response.
///
/// The server's `error` or `message` field wins when the body is JSON;
/// otherwise the HTTP status text stands in.
fn status_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<Value>(body).map_or_else(
        |_| {
            status
                .canonical_reason()
                .map_or_else(|| fallback_message(status), str::to_owned)
        },
        |parsed| extract_message(&parsed).unwrap_or_else(|| fallback_message(status)),
    );

    ApiError::Api {
        status: status.as_u16(),
        message,
    }
}

fn extract_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str))
        .map(str::to_owned)
}

fn fallback_message(status: StatusCode) -> String {
    format!("request failed with status {}", status.as_u16())
}
