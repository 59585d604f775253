//! Expiry command implementation
//!
//! Resolves a commodity contract month to its option expiration date.

use chrono::NaiveDateTime;
use pricer_core::types::Date;
use pricer_models::instruments::commodity::resolve_expiry;
use tracing::info;

use super::OutputFormat;
use crate::Result;

/// Resolve the expiration date without printing
pub fn resolve(commodity: &str, month: &str, now: NaiveDateTime) -> Result<Date> {
    Ok(resolve_expiry(commodity, month, now)?)
}

/// Run the expiry command
pub fn run(commodity: &str, month: &str, now: NaiveDateTime, format: OutputFormat) -> Result<()> {
    info!(commodity, month, %now, "Resolving expiry");
    let expiration = resolve(commodity, month, now)?;

    match format {
        OutputFormat::Table => println!("{} {} expires {}", commodity, month, expiration),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "commodity": commodity,
                "contract_month": month,
                "expiration_date": expiration,
            })
        ),
    }
    Ok(())
}
