//! # parlay_core
//!
//! Fulfillment domain model and response logic for Parlay.

pub mod fulfillment;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
