//! Value command implementation
//!
//! Loads option contracts from a JSON file and values them under one set
//! of market parameters.

use std::path::Path;

use chrono::NaiveDateTime;
use pricer_core::types::Date;
use pricer_models::instruments::commodity::{NewOptionContract, OptionContract, OptionId};
use pricer_models::valuation::{value_batch, MarketParameters, ValuationResult};
use tracing::info;

use super::OutputFormat;
use crate::{CliError, Result};

/// Read a JSON array of contract requests and validate them against `now`
///
/// Records are numbered from 1 in file order.
pub fn load_contracts(path: &Path, now: NaiveDateTime) -> Result<Vec<OptionContract>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let text = std::fs::read_to_string(path)?;
    let requests: Vec<NewOptionContract> = serde_json::from_str(&text)?;

    requests
        .into_iter()
        .enumerate()
        .map(|(i, request)| {
            OptionContract::create(OptionId::new(i as u64 + 1), request, now)
                .map_err(|source| CliError::Contract { index: i + 1, source })
        })
        .collect()
}

/// Render results as a boxed table
pub fn render_table(results: &[ValuationResult]) -> String {
    let mut out = String::new();
    out.push_str("┌──────┬───────────┬───────┬──────┬────────────┬────────────┬────────────┐\n");
    out.push_str("│ ID   │ Commodity │ Month │ Type │ Strike     │ Expiry     │ PV         │\n");
    out.push_str("├──────┼───────────┼───────┼──────┼────────────┼────────────┼────────────┤\n");
    if results.is_empty() {
        out.push_str("│ (no data)                                                             │\n");
    }
    for result in results {
        let c = &result.contract;
        out.push_str(&format!(
            "│ {:<4} │ {:<9} │ {:<5} │ {:<4} │ {:>10.2} │ {:<10} │ {:>10.2} │\n",
            c.id().to_string(),
            c.commodity().to_string(),
            c.contract_month().to_string(),
            c.option_type().to_string(),
            c.strike_price(),
            c.expiration_date().to_string(),
            result.present_value,
        ));
    }
    out.push_str("└──────┴───────────┴───────┴──────┴────────────┴────────────┴────────────┘");
    out
}

/// Run the value command
pub fn run(
    file: &Path,
    market: MarketParameters,
    today: Date,
    now: NaiveDateTime,
    format: OutputFormat,
) -> Result<()> {
    info!(file = %file.display(), %today, "Starting valuation");

    let contracts = load_contracts(file, now)?;
    info!(count = contracts.len(), "Loaded contracts");

    let results = value_batch(&contracts, &market, today)?;

    match format {
        OutputFormat::Table => println!("{}", render_table(&results)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }

    info!("Valuation complete");
    Ok(())
}
