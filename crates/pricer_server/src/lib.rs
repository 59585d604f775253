//! REST API server for Black-76 commodity option valuation
//!
//! This crate exposes the option store and the batch valuation of
//! pricer_models over HTTP.

pub mod clock;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod store;

// Re-export pricer dependencies for integration
pub use pricer_core;
pub use pricer_models;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
