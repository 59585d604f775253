//! CLI error types

use pricer_core::types::{DateError, PricingError};
use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::commodity::{ContractError, ExpiryError};
use pricer_models::valuation::ValuationError;
use thiserror::Error;

/// Errors surfaced by CLI commands
///
/// Model failures are reported through [`PricingError`] so every command
/// prints them in the same categorised form.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid date: {0}")]
    Date(#[from] DateError),

    #[error("Record {index}: {source}")]
    Contract {
        index: usize,
        #[source]
        source: ContractError,
    },

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed contracts file: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ExpiryError> for CliError {
    fn from(err: ExpiryError) -> Self {
        CliError::Pricing(err.into())
    }
}

impl From<AnalyticalError> for CliError {
    fn from(err: AnalyticalError) -> Self {
        CliError::Pricing(err.into())
    }
}

impl From<ValuationError> for CliError {
    fn from(err: ValuationError) -> Self {
        CliError::Pricing(err.into())
    }
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::instruments::commodity::OptionId;

    #[test]
    fn test_expiry_errors_are_categorised() {
        let err: CliError = ExpiryError::InvalidCommodity {
            symbol: "WTI".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Unsupported instrument: Unknown Commodity. Accepted commodities are: BRN or HH"
        );
    }

    #[test]
    fn test_valuation_error_keeps_model_message() {
        let err: CliError = ValuationError {
            id: OptionId::new(2),
            source: AnalyticalError::InvalidSpot { spot: 0.0 },
        }
        .into();
        assert!(matches!(
            err,
            CliError::Pricing(PricingError::InvalidInput(ref msg)) if msg == "Invalid spot price: S = 0"
        ));
    }

    #[test]
    fn test_contract_error_names_record() {
        let err = CliError::Contract {
            index: 3,
            source: ContractError::InvalidStrike { strike: -1.0 },
        };
        assert_eq!(err.to_string(), "Record 3: Strike price cannot be less than 0.");
    }
}
