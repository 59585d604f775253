//! Option type (call or put).

use std::fmt;
use std::str::FromStr;

use crate::analytical::AnalyticalError;

/// Right conveyed by an option.
///
/// Parsing is case-insensitive; the canonical text form is upper case.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
/// assert_eq!("Put".parse::<OptionType>().unwrap(), OptionType::Put);
/// assert!("STRADDLE".parse::<OptionType>().is_err());
/// assert_eq!(OptionType::Call.to_string(), "CALL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy at the strike.
    #[cfg_attr(feature = "serde", serde(rename = "CALL", alias = "Call", alias = "call"))]
    Call,
    /// Right to sell at the strike.
    #[cfg_attr(feature = "serde", serde(rename = "PUT", alias = "Put", alias = "put"))]
    Put,
}

impl OptionType {
    /// All option types.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Canonical upper-case name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "CALL",
            OptionType::Put => "PUT",
        }
    }

    /// Returns `true` for [`OptionType::Call`].
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CALL" => Ok(OptionType::Call),
            "PUT" => Ok(OptionType::Put),
            _ => Err(AnalyticalError::UnknownOptionType {
                option_type: s.to_string(),
            }),
        }
    }
}
