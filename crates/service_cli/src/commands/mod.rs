//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod expiry;
pub mod price;
pub mod value;

use chrono::NaiveDateTime;
use pricer_core::types::Date;

use crate::{CliError, Result};

/// Output formats shared by all commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text or a boxed table
    Table,
    /// Pretty-printed JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            ))),
        }
    }
}

/// Valuation date from `--today`, or the local date
pub fn parse_today(today: Option<&str>) -> Result<Date> {
    match today {
        Some(s) => Ok(Date::parse(s)?),
        None => Ok(Date::today()),
    }
}

/// Reference instant from `--now`, or the local clock
///
/// Accepts `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS` or a bare date
/// (taken at midnight).
pub fn parse_now(now: Option<&str>) -> Result<NaiveDateTime> {
    let Some(s) = now else {
        return Ok(chrono::Local::now().naive_local());
    };

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(Ok)
        .unwrap_or_else(|| {
            Date::parse(s)
                .map(Date::at_midnight)
                .map_err(CliError::from)
        })
}
