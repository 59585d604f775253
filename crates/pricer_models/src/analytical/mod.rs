//! Analytical pricing formulas for European options.
//!
//! This module provides the Black-76 closed form used to value commodity
//! options:
//! - [`Black76`]: generic model over `T: Float`
//! - [`price_option`] / [`present_value`]: date-based entry points with
//!   two-decimal rounding of the year fraction and of the result
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`** for the raw formula
//! - **Typed guards**: invalid spot, volatility or time to expiry are errors,
//!   never NaN prices
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy

pub mod black76;
pub mod distributions;
pub mod error;

pub use black76::{present_value, price_option, time_to_expiry, Black76};
pub use distributions::norm_cdf;
pub use error::AnalyticalError;
