//! Financial instrument definitions.
//!
//! # Modules
//!
//! - [`commodity`]: commodity option contracts and their expiry rules
//!
//! # Types
//!
//! - [`OptionType`]: call or put
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::OptionType;
//! use pricer_models::instruments::commodity::Commodity;
//!
//! let option_type: OptionType = "Put".parse().unwrap();
//! assert_eq!(option_type, OptionType::Put);
//! assert_eq!(Commodity::Brent.symbol(), "BRN");
//! ```

pub mod commodity;
mod option_type;

pub use option_type::OptionType;
