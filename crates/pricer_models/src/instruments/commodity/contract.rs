//! Commodity option contract records.

use std::fmt;

use chrono::NaiveDateTime;
use pricer_core::types::Date;

use super::contract_month::ContractMonth;
use super::error::ContractError;
use super::expiry::resolve;
use super::product::Commodity;
use crate::instruments::OptionType;

/// Storage-assigned identifier of an option contract.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::commodity::OptionId;
///
/// let id = OptionId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OptionId(u64);

impl OptionId {
    /// Creates a new option ID.
    #[inline]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[inline]
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OptionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Unvalidated request to create an option contract.
///
/// `contract_month` also accepts the key `expires_on`. `strike_price` may
/// be a JSON number or a numeric string such as `"100"`. A missing
/// `unit_of_measure` defaults to the commodity's quotation unit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewOptionContract {
    /// Commodity symbol, e.g. `"BRN"`
    pub commodity: String,
    /// Contract month code, e.g. `"Jan24"`
    #[cfg_attr(feature = "serde", serde(alias = "expires_on"))]
    pub contract_month: String,
    /// Strike price
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_strike"))]
    pub strike_price: f64,
    /// `"CALL"` or `"PUT"`, any case
    pub option_type: String,
    /// Quotation unit, e.g. `"USD/BBL"`
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit_of_measure: Option<String>,
}

#[cfg(feature = "serde")]
fn deserialize_strike<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Strike {
        Number(f64),
        Text(String),
    }

    match Strike::deserialize(deserializer)? {
        Strike::Number(value) => Ok(value),
        Strike::Text(text) => text.trim().parse::<f64>().map_err(|_| {
            serde::de::Error::custom(format!("strike_price: '{}' is not a valid number", text))
        }),
    }
}

impl NewOptionContract {
    /// Creates a request with the commodity's default unit.
    pub fn new(
        commodity: impl Into<String>,
        contract_month: impl Into<String>,
        strike_price: f64,
        option_type: impl Into<String>,
    ) -> Self {
        Self {
            commodity: commodity.into(),
            contract_month: contract_month.into(),
            strike_price,
            option_type: option_type.into(),
            unit_of_measure: None,
        }
    }

    /// Sets the quotation unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit_of_measure = Some(unit.into());
        self
    }
}

/// Validated option contract with its expiration date.
///
/// The expiration date is resolved once in [`OptionContract::create`] and
/// has no setter.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pricer_models::instruments::commodity::{NewOptionContract, OptionContract, OptionId};
///
/// let now = NaiveDate::from_ymd_opt(2023, 4, 29).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let request = NewOptionContract::new("BRN", "Jan24", 100.0, "Call");
///
/// let contract = OptionContract::create(OptionId::new(1), request, now).unwrap();
/// assert_eq!(contract.expiration_date().to_string(), "2023-11-30");
/// assert_eq!(contract.unit_of_measure(), "USD/BBL");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    id: OptionId,
    commodity: Commodity,
    contract_month: ContractMonth,
    strike_price: f64,
    option_type: OptionType,
    unit_of_measure: String,
    expiration_date: Date,
}

impl OptionContract {
    /// Validates `request` and resolves its expiration date against `now`.
    ///
    /// Checks run in order: commodity, option type, strike, contract month,
    /// expiry.
    ///
    /// # Errors
    /// - `ContractError::Expiry` for an unknown commodity, a malformed
    ///   contract month or an expiration not after `now`
    /// - `ContractError::UnknownOptionType` unless CALL or PUT
    /// - `ContractError::InvalidStrike` for a negative or NaN strike
    pub fn create(
        id: OptionId,
        request: NewOptionContract,
        now: NaiveDateTime,
    ) -> Result<Self, ContractError> {
        let commodity: Commodity = request.commodity.parse()?;

        let option_type: OptionType =
            request
                .option_type
                .parse()
                .map_err(|_| ContractError::UnknownOptionType {
                    option_type: request.option_type.clone(),
                })?;

        if request.strike_price.is_nan() || request.strike_price < 0.0 {
            return Err(ContractError::InvalidStrike {
                strike: request.strike_price,
            });
        }

        let contract_month: ContractMonth = request.contract_month.parse()?;
        let expiration_date = resolve(commodity, contract_month, now)?;

        Ok(Self {
            id,
            commodity,
            contract_month,
            strike_price: request.strike_price,
            option_type,
            unit_of_measure: request
                .unit_of_measure
                .unwrap_or_else(|| commodity.default_unit().to_string()),
            expiration_date,
        })
    }

    /// Storage identifier.
    #[inline]
    pub fn id(&self) -> OptionId {
        self.id
    }

    /// Underlying commodity.
    #[inline]
    pub fn commodity(&self) -> Commodity {
        self.commodity
    }

    /// Contract month.
    #[inline]
    pub fn contract_month(&self) -> ContractMonth {
        self.contract_month
    }

    /// Strike price.
    #[inline]
    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Quotation unit.
    #[inline]
    pub fn unit_of_measure(&self) -> &str {
        &self.unit_of_measure
    }

    /// Expiration date fixed at creation.
    #[inline]
    pub fn expiration_date(&self) -> Date {
        self.expiration_date
    }
}
