//! Time types, day count and business-day conventions for option valuation.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DayCountConvention`: Year fraction conventions
//! - `BusinessDayConvention`: Weekend roll rules (no holiday calendar)
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{Date, DayCountConvention};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! // Calculate year fraction using ACT/365
//! let yf = DayCountConvention::ActualActual365.year_fraction_dates(start, end);
//! assert!((yf - 0.4986).abs() < 0.001);
//! ```

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and standard date arithmetic.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.day(), 29);
    ///
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns the last calendar day of the given month.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert_eq!(Date::last_day_of_month(2024, 2).unwrap().day(), 29);
    /// assert_eq!(Date::last_day_of_month(2023, 2).unwrap().day(), 28);
    /// assert_eq!(Date::last_day_of_month(2023, 12).unwrap().day(), 31);
    /// ```
    pub fn last_day_of_month(year: i32, month: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidDate {
                year,
                month,
                day: 1,
            });
        }

        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };

        let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or(
            DateError::InvalidDate {
                year,
                month,
                day: 1,
            },
        )?;

        first_of_next
            .pred_opt()
            .map(Date)
            .ok_or(DateError::OutOfRange(format!("{year}-{month}")))
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns true on Saturdays and Sundays.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 6, 15).unwrap().is_weekend()); // Saturday
    /// assert!(!Date::from_ymd(2024, 6, 14).unwrap().is_weekend()); // Friday
    /// ```
    #[inline]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Shifts the date by a signed number of calendar days.
    ///
    /// # Errors
    /// `DateError::OutOfRange` when the result leaves chrono's supported range.
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        self.0
            .checked_add_signed(Duration::days(days))
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange(format!("{} {:+} days", self, days)))
    }

    /// Returns the instant at 00:00 on this date.
    ///
    /// Expiry comparisons against a wall-clock `now` use this instant.
    pub fn at_midnight(self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day Count Convention (year fraction convention).
///
/// Only Actual/365 Fixed is needed for quoting time to expiry.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    ActualActual365,
}

impl DayCountConvention {
    /// Calculates the year fraction between two dates.
    ///
    /// Returns a negative value when `start > end`; the sign carries the
    /// direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::{Date, DayCountConvention};
    ///
    /// let start = Date::from_ymd(2024, 1, 1).unwrap();
    /// let end = Date::from_ymd(2024, 7, 1).unwrap();
    ///
    /// let yf = DayCountConvention::ActualActual365.year_fraction_dates(start, end);
    /// assert!((yf - 0.4986).abs() < 0.001);
    ///
    /// let yf_neg = DayCountConvention::ActualActual365.year_fraction_dates(end, start);
    /// assert!((yf_neg + 0.4986).abs() < 0.001);
    /// ```
    pub fn year_fraction_dates(&self, start: Date, end: Date) -> f64 {
        let days = end - start;

        match self {
            DayCountConvention::ActualActual365 => days as f64 / 365.0,
        }
    }
}

/// Business Day Convention for date adjustments.
///
/// Defines how to roll a date that falls on a non-business day. Only
/// weekends are treated as non-business days; there is no holiday calendar.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{BusinessDayConvention, Date};
///
/// // 2024-06-30 is a Sunday
/// let sunday = Date::from_ymd(2024, 6, 30).unwrap();
/// let rolled = BusinessDayConvention::Preceding.adjust(sunday).unwrap();
/// assert_eq!(rolled, Date::from_ymd(2024, 6, 28).unwrap());
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessDayConvention {
    /// Move backward to the previous business day.
    Preceding,
}

impl BusinessDayConvention {
    /// Rolls `date` onto a business day according to this convention.
    ///
    /// Weekend-only calendar, so each roll takes at most two steps.
    ///
    /// # Errors
    /// `DateError::OutOfRange` if stepping leaves the representable range.
    pub fn adjust(&self, date: Date) -> Result<Date, DateError> {
        match self {
            BusinessDayConvention::Preceding => roll(date, -1),
        }
    }
}

fn roll(mut date: Date, step: i64) -> Result<Date, DateError> {
    while date.is_weekend() {
        date = date.add_days(step)?;
    }
    Ok(date)
}
