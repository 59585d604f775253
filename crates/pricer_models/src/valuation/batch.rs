//! Valuation of option records under one set of market parameters.

use pricer_core::types::Date;

use super::error::ValuationError;
use crate::analytical::{present_value, AnalyticalError};
use crate::instruments::commodity::OptionContract;

/// Market inputs shared by every record in a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParameters {
    /// Annualised risk-free rate
    pub interest_rate: f64,
    /// Annualised volatility, must be positive
    pub volatility: f64,
    /// Spot price of the underlying, must be positive
    pub spot_price: f64,
}

impl MarketParameters {
    /// Creates market parameters.
    pub fn new(interest_rate: f64, volatility: f64, spot_price: f64) -> Self {
        Self {
            interest_rate,
            volatility,
            spot_price,
        }
    }
}

/// An option record enriched with the market inputs and its present value.
///
/// Serialises flat: contract fields, market fields, then `present_value`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationResult {
    /// The valued contract
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub contract: OptionContract,
    /// Market inputs used
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub market: MarketParameters,
    /// Present value, rounded to two decimals
    pub present_value: f64,
}

/// Values a single record.
///
/// # Errors
/// `ValuationError` carrying the record id if the engine rejects the inputs.
pub fn value_option(
    contract: &OptionContract,
    market: &MarketParameters,
    today: Date,
) -> Result<ValuationResult, ValuationError> {
    price(contract, market, today)
        .map(|present_value| ValuationResult {
            contract: contract.clone(),
            market: *market,
            present_value,
        })
        .map_err(|source| ValuationError {
            id: contract.id(),
            source,
        })
}

fn price(
    contract: &OptionContract,
    market: &MarketParameters,
    today: Date,
) -> Result<f64, AnalyticalError> {
    present_value(
        contract.expiration_date(),
        contract.strike_price(),
        contract.option_type(),
        market.interest_rate,
        market.volatility,
        market.spot_price,
        today,
    )
}

/// Values every record, preserving input order and length.
///
/// Stops at the first failing record.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pricer_core::types::Date;
/// use pricer_models::instruments::commodity::{NewOptionContract, OptionContract, OptionId};
/// use pricer_models::valuation::{value_batch, MarketParameters};
///
/// let now = NaiveDate::from_ymd_opt(2023, 4, 29).unwrap().and_hms_opt(0, 0, 1).unwrap();
/// let contract = OptionContract::create(
///     OptionId::new(1),
///     NewOptionContract::new("BRN", "Jan24", 100.0, "Call"),
///     now,
/// )
/// .unwrap();
///
/// let market = MarketParameters::new(0.2, 0.3, 78.94);
/// let today = Date::from_ymd(2023, 4, 29).unwrap();
///
/// let results = value_batch(&[contract], &market, today).unwrap();
/// assert_eq!(results[0].present_value, 3.72);
/// ```
pub fn value_batch(
    records: &[OptionContract],
    market: &MarketParameters,
    today: Date,
) -> Result<Vec<ValuationResult>, ValuationError> {
    records
        .iter()
        .map(|contract| value_option(contract, market, today))
        .collect()
}

/// [`value_batch`] over raw market inputs.
pub fn value_all(
    records: &[OptionContract],
    interest_rate: f64,
    volatility: f64,
    spot_price: f64,
    today: Date,
) -> Result<Vec<ValuationResult>, ValuationError> {
    value_batch(
        records,
        &MarketParameters::new(interest_rate, volatility, spot_price),
        today,
    )
}

/// Parallel [`value_batch`] on the rayon pool.
///
/// Output order matches input order. On failure the reported record is
/// the first failing one in input order, as in the serial version.
#[cfg(feature = "parallel")]
pub fn value_batch_parallel(
    records: &[OptionContract],
    market: &MarketParameters,
    today: Date,
) -> Result<Vec<ValuationResult>, ValuationError> {
    use rayon::prelude::*;

    let outcomes: Vec<Result<ValuationResult, ValuationError>> = records
        .par_iter()
        .map(|contract| value_option(contract, market, today))
        .collect();

    outcomes.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::commodity::{NewOptionContract, OptionId};
    use chrono::{NaiveDate, NaiveDateTime};

    fn created_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 4, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn today() -> Date {
        Date::from_ymd(2023, 4, 29).unwrap()
    }

    fn contract(id: u64, commodity: &str, month: &str, strike: f64, option_type: &str) -> OptionContract {
        OptionContract::create(
            OptionId::new(id),
            NewOptionContract::new(commodity, month, strike, option_type),
            created_at(),
        )
        .unwrap()
    }

    fn seeded() -> Vec<OptionContract> {
        vec![
            contract(1, "BRN", "Jan24", 100.0, "Call"),
            contract(2, "HH", "Mar24", 10.0, "Put"),
            contract(3, "BRN", "Apr24", 100.0, "Call"),
            contract(4, "HH", "May24", 10.0, "Put"),
        ]
    }

    fn brent_market() -> MarketParameters {
        MarketParameters::new(0.2, 0.3, 78.94)
    }

    #[test]
    fn test_seeded_brent_call() {
        let results = value_batch(&seeded()[..1], &brent_market(), today()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].present_value, 3.72);
        assert_eq!(results[0].market, brent_market());
        assert_eq!(results[0].contract.id(), OptionId::new(1));
    }

    #[test]
    fn test_preserves_order_and_length() {
        let records = seeded();
        let results = value_batch(&records, &brent_market(), today()).unwrap();
        assert_eq!(results.len(), records.len());
        for (result, record) in results.iter().zip(&records) {
            assert_eq!(&result.contract, record);
        }
    }

    #[test]
    fn test_empty_batch() {
        let results = value_batch(&[], &brent_market(), today()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_matches_single_pricing() {
        let records = seeded();
        let market = brent_market();
        let results = value_batch(&records, &market, today()).unwrap();
        for (result, record) in results.iter().zip(&records) {
            let expected = present_value(
                record.expiration_date(),
                record.strike_price(),
                record.option_type(),
                market.interest_rate,
                market.volatility,
                market.spot_price,
                today(),
            )
            .unwrap();
            assert_eq!(result.present_value, expected);
        }
    }

    #[test]
    fn test_deterministic() {
        let records = seeded();
        let first = value_batch(&records, &brent_market(), today()).unwrap();
        let second = value_batch(&records, &brent_market(), today()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_value_all_matches_value_batch() {
        let records = seeded();
        assert_eq!(
            value_all(&records, 0.2, 0.3, 78.94, today()),
            value_batch(&records, &brent_market(), today())
        );
    }

    #[test]
    fn test_failure_reports_record_id() {
        let records = seeded();
        let market = MarketParameters::new(0.2, 0.0, 78.94);
        let err = value_batch(&records, &market, today()).unwrap_err();
        assert_eq!(err.id, OptionId::new(1));
        assert_eq!(err.source, AnalyticalError::InvalidVolatility { volatility: 0.0 });
    }

    #[test]
    fn test_expired_record_fails_batch() {
        let records = seeded();
        // Valued the day after the Brent Jan24 option expired
        let late = Date::from_ymd(2023, 12, 1).unwrap();
        let err = value_batch(&records, &brent_market(), late).unwrap_err();
        assert_eq!(err.id, OptionId::new(1));
        assert!(matches!(
            err.source,
            AnalyticalError::NonPositiveTimeToExpiry { .. }
        ));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let records: Vec<OptionContract> = (0..64).flat_map(|_| seeded()).collect();
        let serial = value_batch(&records, &brent_market(), today()).unwrap();
        let parallel = value_batch_parallel(&records, &brent_market(), today()).unwrap();
        assert_eq!(serial, parallel);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_result_serialises_flat() {
        let results = value_batch(&seeded()[..1], &brent_market(), today()).unwrap();
        let json = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(json["commodity"], "BRN");
        assert_eq!(json["contract_month"], "Jan24");
        assert_eq!(json["expiration_date"], "2023-11-30");
        assert_eq!(json["interest_rate"], 0.2);
        assert_eq!(json["spot_price"], 78.94);
        assert_eq!(json["present_value"], 3.72);
    }
}
