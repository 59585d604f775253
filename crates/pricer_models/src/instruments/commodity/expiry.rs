//! Expiration date resolution for commodity options.
//!
//! An option on contract month `M` expires on the last business day of
//! `M + offset`, where the offset depends on the commodity (Brent two
//! months before, Henry Hub one month before). Business days are Monday
//! to Friday; there is no holiday calendar.
//!
//! ```text
//! "BRN", "Jan24"  ->  Nov 2023  ->  2023-11-30 (Thu)
//! "HH",  "Jun24"  ->  May 2024  ->  2024-05-31 (Fri)
//! "HH",  "Jul24"  ->  Jun 2024  ->  2024-06-30 (Sun) -> 2024-06-28 (Fri)
//! ```

use chrono::NaiveDateTime;
use pricer_core::types::{BusinessDayConvention, Date};

use super::contract_month::ContractMonth;
use super::error::ExpiryError;
use super::product::Commodity;

/// Last weekday of `year`/`month`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::commodity::last_business_day;
///
/// // 2024-03-31 is a Sunday
/// assert_eq!(last_business_day(2024, 3).unwrap().to_string(), "2024-03-29");
/// ```
pub fn last_business_day(year: i32, month: u32) -> Result<Date, ExpiryError> {
    let month_end = Date::last_day_of_month(year, month)?;
    Ok(BusinessDayConvention::Preceding.adjust(month_end)?)
}

/// Expiration date of an option on `contract_month`, without the
/// past-expiry check.
pub fn expiration_date(
    commodity: Commodity,
    contract_month: ContractMonth,
) -> Result<Date, ExpiryError> {
    let expiry_month = contract_month.shifted(commodity.expiry_month_offset());
    last_business_day(expiry_month.year(), expiry_month.month())
}

/// Resolves the expiration date and requires it to lie after `now`.
///
/// The date is compared at 00:00, so an option expiring today is already
/// past expiry.
///
/// # Errors
/// `ExpiryError::PastExpiry` when the expiration at midnight is not
/// strictly later than `now`.
pub fn resolve(
    commodity: Commodity,
    contract_month: ContractMonth,
    now: NaiveDateTime,
) -> Result<Date, ExpiryError> {
    let expiration = expiration_date(commodity, contract_month)?;
    if expiration.at_midnight() <= now {
        return Err(ExpiryError::PastExpiry { expiration, now });
    }
    Ok(expiration)
}

/// Resolves an expiration date from raw commodity and contract month text.
///
/// The contract month is parsed before the commodity is checked, so a
/// request with both wrong reports the malformed month.
///
/// # Errors
/// - `ExpiryError::MalformedContractMonth` if the code cannot be parsed
/// - `ExpiryError::InvalidCommodity` for symbols other than BRN and HH
/// - `ExpiryError::PastExpiry` if the date is not after `now`
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pricer_models::instruments::commodity::resolve_expiry;
///
/// let now = NaiveDate::from_ymd_opt(2023, 11, 1)
///     .unwrap()
///     .and_hms_opt(9, 30, 0)
///     .unwrap();
///
/// let expiry = resolve_expiry("BRN", "Jan24", now).unwrap();
/// assert_eq!(expiry.to_string(), "2023-11-30");
/// ```
pub fn resolve_expiry(
    commodity: &str,
    contract_month: &str,
    now: NaiveDateTime,
) -> Result<Date, ExpiryError> {
    let contract_month: ContractMonth = contract_month.parse()?;
    let commodity: Commodity = commodity.parse()?;
    resolve(commodity, contract_month, now)
}
