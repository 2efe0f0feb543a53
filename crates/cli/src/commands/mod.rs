//! Command handlers, one module per resource.

pub mod analytics;
pub mod auth;
pub mod category;
pub mod coupon;
pub mod order;
pub mod payment;
pub mod product;
pub mod setting;
pub mod user;

/// Print a JSON document to stdout.
///
/// Data goes to stdout so it can be piped to `jq`; diagnostics stay on the
/// tracing layer.
#[allow(clippy::print_stdout)]
pub(crate) fn emit<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
