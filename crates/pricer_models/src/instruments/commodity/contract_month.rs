//! Contract month codes such as `"Mar24"`.

use std::fmt;
use std::str::FromStr;

use super::error::ExpiryError;

/// Month abbreviations, January first.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Two-digit years are read as `2000 + yy`.
const CENTURY: i32 = 2000;

/// Delivery month of a commodity contract.
///
/// Parsed from a code whose first three characters name the month (any
/// case) and whose last two digits give the year. Anything in between is
/// ignored, so `"Sept24"` and `"Jan2024"` are accepted.
///
/// # Examples
/// ```
/// use pricer_models::instruments::commodity::ContractMonth;
///
/// let month: ContractMonth = "mar24".parse().unwrap();
/// assert_eq!((month.year(), month.month()), (2024, 3));
/// assert_eq!(month.to_string(), "Mar24");
///
/// let shifted = "Jan24".parse::<ContractMonth>().unwrap().shifted(-2);
/// assert_eq!((shifted.year(), shifted.month()), (2023, 11));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContractMonth {
    year: i32,
    month: u32,
}

impl ContractMonth {
    /// Creates a contract month; `month` is 1-based.
    ///
    /// Returns `None` when `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Calendar year.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of year, 1..=12.
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Moves by `months`, carrying into the year on either side.
    pub fn shifted(self, months: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + months;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    fn malformed(code: &str, reason: &'static str) -> ExpiryError {
        ExpiryError::MalformedContractMonth {
            code: code.to_string(),
            reason,
        }
    }
}

impl FromStr for ContractMonth {
    type Err = ExpiryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 5 {
            return Err(Self::malformed(s, "expected a code like 'Mar24'"));
        }

        let month_part = &s[..3];
        let year_part = &s[s.len() - 2..];

        let month = MONTH_ABBREVIATIONS
            .iter()
            .position(|abbr| abbr.eq_ignore_ascii_case(month_part))
            .ok_or_else(|| Self::malformed(s, "unknown month abbreviation"))?;

        if !year_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Self::malformed(s, "year must be two digits"));
        }
        let yy: i32 = year_part
            .parse()
            .map_err(|_| Self::malformed(s, "year must be two digits"))?;

        Ok(Self {
            year: CENTURY + yy,
            month: month as u32 + 1,
        })
    }
}

impl fmt::Display for ContractMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:02}",
            MONTH_ABBREVIATIONS[(self.month - 1) as usize],
            self.year.rem_euclid(100)
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ContractMonth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ContractMonth {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(code: &str) -> ContractMonth {
        code.parse().unwrap()
    }

    #[test]
    fn test_parse_all_months() {
        for (i, abbr) in MONTH_ABBREVIATIONS.iter().enumerate() {
            let month = parse(&format!("{}24", abbr));
            assert_eq!(month.month(), i as u32 + 1);
            assert_eq!(month.year(), 2024);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(parse("JAN24"), parse("Jan24"));
        assert_eq!(parse("jan24"), parse("Jan24"));
    }

    #[test]
    fn test_two_digit_year_range() {
        assert_eq!(parse("Jan00").year(), 2000);
        assert_eq!(parse("Dec99").year(), 2099);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for code in ["", "Jan", "Jan4", "Foo24", "Jan2x", "Jan-4", "Jän24", "Jan+1", "Sept2x"] {
            assert!(
                matches!(
                    code.parse::<ContractMonth>(),
                    Err(ExpiryError::MalformedContractMonth { .. })
                ),
                "{:?} should be malformed",
                code
            );
        }
    }

    #[test]
    fn test_parse_longer_codes() {
        assert_eq!(parse("Sept24"), parse("Sep24"));
        assert_eq!(parse("March24"), parse("Mar24"));
        assert_eq!(parse("Jan2024"), parse("Jan24"));
        assert_eq!(parse("DECEMBER25"), parse("Dec25"));
    }

    #[test]
    fn test_shifted_wraps_year() {
        let shifted = parse("Jan24").shifted(-2);
        assert_eq!((shifted.year(), shifted.month()), (2023, 11));

        let shifted = parse("Feb24").shifted(-2);
        assert_eq!((shifted.year(), shifted.month()), (2023, 12));

        let shifted = parse("Mar24").shifted(-1);
        assert_eq!((shifted.year(), shifted.month()), (2024, 2));

        let shifted = parse("Dec24").shifted(1);
        assert_eq!((shifted.year(), shifted.month()), (2025, 1));
    }

    #[test]
    fn test_new_validates_month() {
        assert!(ContractMonth::new(2024, 0).is_none());
        assert!(ContractMonth::new(2024, 13).is_none());
        assert_eq!(ContractMonth::new(2024, 3), Some(parse("Mar24")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_code() {
        assert_eq!(serde_json::to_string(&parse("mar24")).unwrap(), "\"Mar24\"");
        let month: ContractMonth = serde_json::from_str("\"Apr24\"").unwrap();
        assert_eq!(month, parse("Apr24"));
        assert!(serde_json::from_str::<ContractMonth>("\"April\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_display_parse_round_trip(month in 1u32..=12, yy in 0i32..100) {
            let original = ContractMonth::new(2000 + yy, month).unwrap();
            prop_assert_eq!(original.to_string().parse::<ContractMonth>().unwrap(), original);
        }

        #[test]
        fn prop_shift_inverse(month in 1u32..=12, year in 2000i32..2100, by in -36i32..36) {
            let original = ContractMonth::new(year, month).unwrap();
            prop_assert_eq!(original.shifted(by).shifted(-by), original);
        }
    }
}
