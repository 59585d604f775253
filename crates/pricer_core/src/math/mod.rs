//! Numeric helpers shared across the workspace.
//!
//! - `rounding`: decimal rounding for quoted values

pub mod rounding;

pub use rounding::{round_quote, round_to_decimals};
