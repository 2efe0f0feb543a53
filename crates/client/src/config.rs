//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MARIGOLD_API_URL` - Base URL of the admin API
//!   (default: `http://localhost:5000/api`)
//! - `MARIGOLD_TOKEN_FILE` - Where the auth token is persisted
//!   (default: `$HOME/.config/marigold/token`, or `./.marigold-token` when
//!   no home directory is available)

use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

/// Default API base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set to an unusable value.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are appended to.
    pub base_url: Url,
    /// Token file path, see [`crate::TokenStore`].
    pub token_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `MARIGOLD_API_URL` is set to something that
    /// does not parse as an absolute http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = parse_base_url(&get_env_or_default("MARIGOLD_API_URL", DEFAULT_API_URL))
            .map_err(|reason| ConfigError::InvalidEnvVar("MARIGOLD_API_URL".to_owned(), reason))?;

        let token_file = std::env::var_os("MARIGOLD_TOKEN_FILE")
            .map_or_else(default_token_file, PathBuf::from);

        Ok(Self {
            base_url,
            token_file,
        })
    }

    /// Build a configuration directly, bypassing the environment.
    #[must_use]
    pub fn new(base_url: Url, token_file: impl Into<PathBuf>) -> Self {
        Self {
            base_url,
            token_file: token_file.into(),
        }
    }
}

/// Parse and sanity-check a base URL.
fn parse_base_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported URL scheme \"{other}\"")),
    }
}

/// Default token file location, keyed off the home directory.
fn default_token_file() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(".marigold-token"),
        |home| Path::new(&home).join(".config/marigold/token"),
    )
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_valid() {
        let url = parse_base_url("http://localhost:5000/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api");

        assert!(parse_base_url("https://api.marigold.shop/api").is_ok());
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn test_parse_base_url_rejects_non_http_schemes() {
        let err = parse_base_url("ftp://example.com").unwrap_err();
        assert!(err.contains("ftp"));
    }

    #[test]
    fn test_default_url_parses() {
        assert!(parse_base_url(DEFAULT_API_URL).is_ok());
    }
}
