//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to the Black-76 engine

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `UnknownOptionType`: Option type is neither CALL nor PUT
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `NonPositiveTimeToExpiry`: Rounded time to expiry is zero or negative
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Option type string not recognised.
    #[error("Invalid Option Type '{option_type}'. Allowed values: Call or Put.")]
    UnknownOptionType {
        /// The rejected option type text
        option_type: String,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Time to expiry rounded to zero or below.
    #[error("Non-positive time to expiry: T = {time_to_expiry}")]
    NonPositiveTimeToExpiry {
        /// The rounded year fraction
        time_to_expiry: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::UnknownOptionType { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
            AnalyticalError::InvalidVolatility { .. }
            | AnalyticalError::InvalidSpot { .. }
            | AnalyticalError::NonPositiveTimeToExpiry { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_option_type_display() {
        let err = AnalyticalError::UnknownOptionType {
            option_type: "STRADDLE".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid Option Type 'STRADDLE'. Allowed values: Call or Put."
        );
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_non_positive_time_display() {
        let err = AnalyticalError::NonPositiveTimeToExpiry {
            time_to_expiry: 0.0,
        };
        assert_eq!(format!("{}", err), "Non-positive time to expiry: T = 0");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    // ==========================================================
    // From<AnalyticalError> for PricingError tests
    // ==========================================================

    #[test]
    fn test_unknown_option_type_to_pricing_error() {
        let err = AnalyticalError::UnknownOptionType {
            option_type: "STRADDLE".to_string(),
        };
        match PricingError::from(err) {
            PricingError::UnsupportedInstrument(msg) => assert!(msg.contains("STRADDLE")),
            other => panic!("Expected UnsupportedInstrument, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_guards_to_invalid_input() {
        let errs = [
            AnalyticalError::InvalidVolatility { volatility: -0.1 },
            AnalyticalError::InvalidSpot { spot: 0.0 },
            AnalyticalError::NonPositiveTimeToExpiry {
                time_to_expiry: -0.5,
            },
        ];
        for err in errs {
            assert!(matches!(
                PricingError::from(err),
                PricingError::InvalidInput(_)
            ));
        }
    }
}
