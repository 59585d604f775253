//! Price command implementation
//!
//! Prices one option from its expiration date with Black-76.

use pricer_core::types::Date;
use pricer_models::analytical::{price_option, time_to_expiry};
use tracing::info;

use super::OutputFormat;
use crate::Result;

/// Inputs of a single valuation
#[derive(Debug, Clone)]
pub struct PriceArgs {
    /// Expiration date
    pub expiry: Date,
    /// Strike price
    pub strike: f64,
    /// `CALL` or `PUT`, any case
    pub option_type: String,
    /// Risk-free rate
    pub rate: f64,
    /// Volatility
    pub volatility: f64,
    /// Futures price
    pub spot: f64,
    /// Valuation date
    pub today: Date,
}

/// Run the price command
pub fn run(args: &PriceArgs, format: OutputFormat) -> Result<()> {
    info!(
        expiry = %args.expiry,
        strike = args.strike,
        option_type = %args.option_type,
        today = %args.today,
        "Pricing option"
    );

    let pv = price_option(
        args.expiry,
        args.strike,
        &args.option_type,
        args.rate,
        args.volatility,
        args.spot,
        args.today,
    )?;
    let years = time_to_expiry(args.expiry, args.today);

    match format {
        OutputFormat::Table => println!("{:.2}", pv),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "expiration_date": args.expiry,
                "time_to_expiry": years,
                "option_type": args.option_type.to_uppercase(),
                "present_value": pv,
            })
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use pricer_core::types::PricingError;

    fn args(option_type: &str) -> PriceArgs {
        PriceArgs {
            expiry: Date::from_ymd(2023, 11, 30).unwrap(),
            strike: 100.0,
            option_type: option_type.to_string(),
            rate: 0.2,
            volatility: 0.3,
            spot: 78.94,
            today: Date::from_ymd(2023, 4, 29).unwrap(),
        }
    }

    #[test]
    fn test_price_runs() {
        assert!(run(&args("call"), OutputFormat::Table).is_ok());
        assert!(run(&args("PUT"), OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_price_rejects_unknown_type() {
        assert!(matches!(
            run(&args("straddle"), OutputFormat::Table),
            Err(CliError::Pricing(PricingError::UnsupportedInstrument(_)))
        ));
    }
}
