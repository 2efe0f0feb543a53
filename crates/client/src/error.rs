//! Client-level errors.

use thiserror::Error;

use crate::token::TokenStoreError;

/// Errors that can occur when talking to the admin API.
///
/// Every failure is terminal for its request; there is no retry layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    ///
    /// `message` carries the server's `error`/`message` field when the body
    /// had one, otherwise the HTTP status text. Display is the message
    /// alone so callers can surface it verbatim.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-provided or status-derived message.
        message: String,
    },

    /// The backend could not be reached at all.
    #[error("unable to connect to the server at {base_url}")]
    Connect {
        /// The configured base URL that did not answer.
        base_url: String,
    },

    /// Transport failure other than connection refusal.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx body did not deserialize into the expected shape.
    #[error("response parse error: {0}")]
    Parse(String),

    /// The token file could not be read or written.
    #[error(transparent)]
    Token(#[from] TokenStoreError),
}

impl ApiError {
    /// The HTTP status code, for API-level failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
