//! # pricer_core: Foundation types for commodity option valuation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Time types: `Date`, `DayCountConvention`, `BusinessDayConvention` (`types::time`)
//! - Error types: `PricingError`, `DateError` (`types::error`)
//! - Decimal rounding for quoted values (`math::rounding`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::rounding::round_quote;
//! use pricer_core::types::{BusinessDayConvention, Date, DayCountConvention};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//! let year_fraction = DayCountConvention::ActualActual365.year_fraction_dates(start, end);
//! assert_eq!(round_quote(year_fraction), 0.5);
//!
//! // Month-end on a weekend rolls back to Friday
//! let month_end = Date::last_day_of_month(2024, 6).unwrap();
//! let adjusted = BusinessDayConvention::Preceding.adjust(month_end).unwrap();
//! assert_eq!(adjusted.to_string(), "2024-06-28");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Date`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
