//! Typed client for the Marigold Commerce admin REST API.
//!
//! The backend owns all state; this crate is request/response glue with a
//! typed surface. [`ApiClient`] wraps the HTTP layer - bearer-token
//! injection, JSON envelope normalization, error mapping - and the service
//! modules add one pass-through method per endpoint (products, categories,
//! orders, coupons, payments, users, settings, analytics, auth).
//!
//! # Example
//!
//! ```no_run
//! use marigold_client::{ApiClient, ClientConfig, services::ProductFilters};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(ClientConfig::from_env()?)?;
//!
//! let filters = ProductFilters {
//!     search: Some("assam".to_owned()),
//!     ..ProductFilters::default()
//! };
//! for product in client.list_products(&filters).await? {
//!     println!("{} ({})", product.name, product.stock_quantity);
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod config;
pub mod error;
pub mod services;
pub mod token;
pub mod types;

pub use client::ApiClient;
pub use config::{ClientConfig, ConfigError, DEFAULT_API_URL};
pub use error::ApiError;
pub use token::{TokenStore, TokenStoreError};
