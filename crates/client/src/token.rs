//! File-backed bearer token storage.
//!
//! The admin token has to survive across invocations the way a browser
//! session keeps it in local storage, so it lives in a small file (mode 0600
//! on unix). An absent file means logged out.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::debug;

/// Errors from reading or writing the token file.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// The token file exists but could not be read.
    #[error("failed to read token file {path}: {source}")]
    Read {
        /// Token file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The token file could not be written.
    #[error("failed to write token file {path}: {source}")]
    Write {
        /// Token file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The token file could not be removed.
    #[error("failed to remove token file {path}: {source}")]
    Remove {
        /// Token file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Persistent storage for the bearer token.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a store over the given token file path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The token file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored token, if any.
    ///
    /// An absent or blank file means no token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::Read`] if the file exists but cannot be
    /// read.
    pub fn load(&self) -> Result<Option<SecretString>, TokenStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(SecretString::from(trimmed.to_owned())))
                }
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(TokenStoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Persist a token, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::Write`] if the file or its directories
    /// cannot be created.
    pub fn save(&self, token: &SecretString) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| TokenStoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, token.expose_secret()).map_err(|source| TokenStoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        // Token file must not be world-readable
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(
                |source| TokenStoreError::Write {
                    path: self.path.clone(),
                    source,
                },
            )?;
        }

        debug!(path = %self.path.display(), "auth token persisted");

        Ok(())
    }

    /// Remove the stored token. Removing an absent token is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::Remove`] on any I/O failure other than the
    /// file already being gone.
    pub fn clear(&self) -> Result<(), TokenStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "auth token cleared");
                Ok(())
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(TokenStoreError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
