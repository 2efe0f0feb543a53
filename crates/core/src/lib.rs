//! Marigold Core - Shared types library.
//!
//! This crate provides common types used across all Marigold Commerce
//! components:
//! - `client` - Typed client for the admin REST API
//! - `cli` - Command-line admin tooling
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
