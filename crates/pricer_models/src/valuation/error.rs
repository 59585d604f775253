//! Batch valuation errors.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::analytical::AnalyticalError;
use crate::instruments::commodity::OptionId;

/// A record in the batch could not be priced.
///
/// The whole batch fails; `id` names the first failing record in input
/// order.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
/// use pricer_models::instruments::commodity::OptionId;
/// use pricer_models::valuation::ValuationError;
///
/// let err = ValuationError {
///     id: OptionId::new(3),
///     source: AnalyticalError::InvalidVolatility { volatility: 0.0 },
/// };
/// assert_eq!(format!("{}", err), "Failed to value option 3: Invalid volatility: σ = 0");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to value option {id}: {source}")]
pub struct ValuationError {
    /// Identifier of the failing record
    pub id: OptionId,
    /// Pricing failure
    #[source]
    pub source: AnalyticalError,
}

impl From<ValuationError> for PricingError {
    fn from(err: ValuationError) -> Self {
        PricingError::from(err.source)
    }
}
