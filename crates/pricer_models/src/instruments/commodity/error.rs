//! Commodity contract error types.
//!
//! This module provides:
//! - `ExpiryError`: failures resolving a contract month to an expiration date
//! - `ContractError`: failures creating an option contract record
//!
//! Display strings of the user-facing variants are the messages returned by
//! the API on validation failure.

use chrono::NaiveDateTime;
use pricer_core::types::{Date, DateError, PricingError};
use thiserror::Error;

/// Expiry resolution errors.
///
/// # Examples
/// ```
/// use pricer_models::instruments::commodity::ExpiryError;
///
/// let err = ExpiryError::InvalidCommodity { symbol: "WTI".to_string() };
/// assert_eq!(
///     format!("{}", err),
///     "Unknown Commodity. Accepted commodities are: BRN or HH"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpiryError {
    /// Commodity symbol outside the supported set.
    #[error("Unknown Commodity. Accepted commodities are: BRN or HH")]
    InvalidCommodity {
        /// The rejected symbol
        symbol: String,
    },

    /// Contract month code could not be parsed.
    #[error("Malformed contract month '{code}': {reason}")]
    MalformedContractMonth {
        /// The rejected code
        code: String,
        /// What was wrong with it
        reason: &'static str,
    },

    /// Resolved expiration is not after the creation instant.
    #[error("Expiry date should be later than today.")]
    PastExpiry {
        /// The resolved expiration date
        expiration: Date,
        /// The instant it was compared against
        now: NaiveDateTime,
    },

    /// Calendar arithmetic left the supported date range.
    #[error("Calendar error: {0}")]
    Calendar(#[from] DateError),
}

/// Option contract creation errors.
///
/// # Examples
/// ```
/// use pricer_models::instruments::commodity::ContractError;
///
/// let err = ContractError::InvalidStrike { strike: -1.0 };
/// assert_eq!(format!("{}", err), "Strike price cannot be less than 0.");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    /// Strike is negative or not a number.
    #[error("Strike price cannot be less than 0.")]
    InvalidStrike {
        /// The rejected strike
        strike: f64,
    },

    /// Option type is neither CALL nor PUT.
    #[error("Invalid Option Type. Allowed values: Call or Put.")]
    UnknownOptionType {
        /// The rejected option type text
        option_type: String,
    },

    /// Expiry could not be resolved.
    #[error(transparent)]
    Expiry(#[from] ExpiryError),
}

impl From<ExpiryError> for PricingError {
    fn from(err: ExpiryError) -> Self {
        match err {
            ExpiryError::InvalidCommodity { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
            ExpiryError::MalformedContractMonth { .. } | ExpiryError::PastExpiry { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            ExpiryError::Calendar(_) => PricingError::ModelFailure(err.to_string()),
        }
    }
}

impl From<ContractError> for PricingError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::Expiry(inner) => inner.into(),
            ContractError::UnknownOptionType { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
            ContractError::InvalidStrike { .. } => PricingError::InvalidInput(err.to_string()),
        }
    }
}
