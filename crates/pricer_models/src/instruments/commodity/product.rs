//! Supported commodity underlyings.

use std::fmt;
use std::str::FromStr;

use super::error::ExpiryError;

/// Commodity underlying of an option contract.
///
/// Symbols are matched exactly (`"BRN"`, `"HH"`); `"brn"` is rejected.
///
/// # Examples
/// ```
/// use pricer_models::instruments::commodity::Commodity;
///
/// let brent: Commodity = "BRN".parse().unwrap();
/// assert_eq!(brent, Commodity::Brent);
/// assert_eq!(brent.expiry_month_offset(), -2);
/// assert!("WTI".parse::<Commodity>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Commodity {
    /// ICE Brent crude.
    #[cfg_attr(feature = "serde", serde(rename = "BRN"))]
    Brent,
    /// Henry Hub natural gas.
    #[cfg_attr(feature = "serde", serde(rename = "HH"))]
    HenryHub,
}

impl Commodity {
    /// All supported commodities.
    pub const ALL: [Commodity; 2] = [Commodity::Brent, Commodity::HenryHub];

    /// Exchange symbol.
    #[inline]
    pub fn symbol(&self) -> &'static str {
        match self {
            Commodity::Brent => "BRN",
            Commodity::HenryHub => "HH",
        }
    }

    /// Months between the contract month and the month the option expires in.
    #[inline]
    pub fn expiry_month_offset(&self) -> i32 {
        match self {
            Commodity::Brent => -2,
            Commodity::HenryHub => -1,
        }
    }

    /// Quotation unit used when a contract does not carry its own.
    #[inline]
    pub fn default_unit(&self) -> &'static str {
        match self {
            Commodity::Brent => "USD/BBL",
            Commodity::HenryHub => "USD/MMBTu",
        }
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Commodity {
    type Err = ExpiryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Commodity::ALL
            .into_iter()
            .find(|c| c.symbol() == s)
            .ok_or_else(|| ExpiryError::InvalidCommodity {
                symbol: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        assert_eq!("BRN".parse::<Commodity>().unwrap(), Commodity::Brent);
        assert_eq!("HH".parse::<Commodity>().unwrap(), Commodity::HenryHub);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        for symbol in ["brn", "hh", "Brn", "WTI", "", " BRN"] {
            match symbol.parse::<Commodity>() {
                Err(ExpiryError::InvalidCommodity { symbol: s }) => assert_eq!(s, symbol),
                other => panic!("Expected InvalidCommodity for {:?}, got {:?}", symbol, other),
            }
        }
    }

    #[test]
    fn test_offsets_and_units() {
        assert_eq!(Commodity::Brent.expiry_month_offset(), -2);
        assert_eq!(Commodity::HenryHub.expiry_month_offset(), -1);
        assert_eq!(Commodity::Brent.default_unit(), "USD/BBL");
        assert_eq!(Commodity::HenryHub.default_unit(), "USD/MMBTu");
    }

    #[test]
    fn test_display_is_symbol() {
        for commodity in Commodity::ALL {
            assert_eq!(commodity.to_string(), commodity.symbol());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_symbol() {
        assert_eq!(serde_json::to_string(&Commodity::HenryHub).unwrap(), "\"HH\"");
        let parsed: Commodity = serde_json::from_str("\"BRN\"").unwrap();
        assert_eq!(parsed, Commodity::Brent);
    }
}
