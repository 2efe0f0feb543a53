//! Integration tests for the Marigold Commerce admin client.
//!
//! The suites drive [`marigold_client::ApiClient`] against a local
//! `httpmock` server; nothing here talks to a real backend.
//!
//! # Test Categories
//!
//! - `client_http` - envelope normalization and error mapping
//! - `client_auth` - token persistence and the login/logout lifecycle
//! - `services` - endpoint paths, query strings, and payload shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use httpmock::MockServer;
use marigold_client::{ApiClient, ClientConfig};
use url::Url;

/// A client wired to a mock server, with its token file in a temp dir.
///
/// The mock server plays the backend behind a `/api` prefix, matching the
/// default deployment layout.
pub struct TestContext {
    pub server: MockServer,
    pub client: ApiClient,
    token_dir: tempfile::TempDir,
}

impl TestContext {
    /// Start a mock server and point a fresh (logged-out) client at it.
    ///
    /// # Panics
    ///
    /// Panics on setup failure; this is test scaffolding.
    #[must_use]
    pub fn new() -> Self {
        Self::with_token(None)
    }

    /// Like [`Self::new`], but with a token already persisted, as if a
    /// previous invocation had logged in.
    ///
    /// # Panics
    ///
    /// Panics on setup failure; this is test scaffolding.
    #[must_use]
    pub fn with_token(token: Option<&str>) -> Self {
        let server = MockServer::start();
        let token_dir = tempfile::tempdir().expect("create temp dir");
        let token_file = token_dir.path().join("token");

        if let Some(token) = token {
            std::fs::write(&token_file, token).expect("seed token file");
        }

        let base_url =
            Url::parse(&format!("{}/api", server.base_url())).expect("parse mock base url");
        let client =
            ApiClient::new(ClientConfig::new(base_url, &token_file)).expect("create client");

        Self {
            server,
            client,
            token_dir,
        }
    }

    /// Path of the token file backing this context's client.
    #[must_use]
    pub fn token_file(&self) -> PathBuf {
        self.token_dir.path().join("token")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
