//! # Pricer Models (L2: Business Logic)
//!
//! Commodity option contracts and their Black-76 valuation.
//!
//! This crate provides:
//! - Instrument definitions: commodities, contract months, option records
//! - Expiry resolution: contract month to last business day of the
//!   commodity's expiry month
//! - The Black-76 closed form with two-decimal quoting
//! - Batch valuation of option records under shared market parameters
//!
//! ## Design Principles
//!
//! - **Pure functions**: the valuation date and the creation instant are
//!   explicit arguments; nothing reads the clock
//! - **Typed errors** per module, convertible into
//!   [`pricer_core::types::PricingError`]
//! - **Enum-based instruments** for closed sets (commodity, option type)
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pricer_core::types::Date;
//! use pricer_models::analytical::price_option;
//! use pricer_models::instruments::commodity::resolve_expiry;
//!
//! let now = NaiveDate::from_ymd_opt(2023, 4, 29).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let expiry = resolve_expiry("BRN", "Jan24", now).unwrap();
//!
//! let today = Date::from_ymd(2023, 4, 29).unwrap();
//! let pv = price_option(expiry, 100.0, "CALL", 0.2, 0.3, 78.94, today).unwrap();
//! assert_eq!(pv, 3.72);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod valuation;
