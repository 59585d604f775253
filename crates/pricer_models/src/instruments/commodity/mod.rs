//! Commodity option instruments.
//!
//! This module provides:
//! - [`Commodity`]: supported underlyings (Brent, Henry Hub)
//! - [`ContractMonth`]: `"Mar24"`-style delivery month codes
//! - Expiry resolution: [`resolve_expiry`], [`resolve`], [`last_business_day`]
//! - [`OptionContract`]: validated contract records with a fixed
//!   expiration date
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use pricer_models::instruments::commodity::{Commodity, ContractMonth, resolve};
//!
//! let now = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let month: ContractMonth = "Mar24".parse().unwrap();
//!
//! let expiry = resolve(Commodity::HenryHub, month, now).unwrap();
//! assert_eq!(expiry.to_string(), "2024-02-29");
//! ```

mod contract;
mod contract_month;
mod error;
mod expiry;
mod product;

pub use contract::{NewOptionContract, OptionContract, OptionId};
pub use contract_month::{ContractMonth, MONTH_ABBREVIATIONS};
pub use error::{ContractError, ExpiryError};
pub use expiry::{expiration_date, last_business_day, resolve, resolve_expiry};
pub use product::Commodity;
