//! Core time and error types.
//!
//! This module provides:
//! - `time`: `Date`, `DayCountConvention`, `BusinessDayConvention`
//! - `error`: Structured error types for pricing and date operations
//!
//! # Re-exports
//!
//! - [`Date`], [`DayCountConvention`], [`BusinessDayConvention`] from `time`
//! - [`PricingError`], [`DateError`] from `error`

pub mod error;
pub mod time;

pub use error::{DateError, PricingError};
pub use time::{BusinessDayConvention, Date, DayCountConvention};
