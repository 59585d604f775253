//! b76 - Command Line Operations for Black-76 Commodity Options
//!
//! # Commands
//!
//! - `b76 expiry --commodity BRN --month Jan24` - Resolve an option expiration date
//! - `b76 price --expiry 2023-11-30 --strike 100 --type call ...` - Price one option
//! - `b76 value --file contracts.json ...` - Value a file of contracts
//!
//! # Architecture
//!
//! As part of the service layer, this crate wires the pricer crates to a
//! command-line interface and owns logging.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pricer_models::valuation::MarketParameters;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

use commands::{parse_now, parse_today, OutputFormat};

/// Black-76 commodity option CLI
#[derive(Parser)]
#[command(name = "b76")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the expiration date of a contract month
    Expiry {
        /// Commodity symbol (BRN or HH)
        #[arg(short, long)]
        commodity: String,

        /// Contract month code, e.g. Jan24
        #[arg(short, long)]
        month: String,

        /// Reference instant (YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD); defaults to now
        #[arg(long)]
        now: Option<String>,
    },

    /// Price a single option with Black-76
    Price {
        /// Expiration date (YYYY-MM-DD)
        #[arg(short, long)]
        expiry: String,

        /// Strike price
        #[arg(short, long)]
        strike: f64,

        /// Option type (call or put)
        #[arg(short = 't', long = "type")]
        option_type: String,

        /// Risk-free interest rate
        #[arg(short, long)]
        rate: f64,

        /// Volatility
        #[arg(long)]
        vol: f64,

        /// Futures price of the underlying
        #[arg(long)]
        spot: f64,

        /// Valuation date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<String>,
    },

    /// Value every contract in a JSON file
    Value {
        /// Path to a JSON array of contracts
        #[arg(long)]
        file: PathBuf,

        /// Risk-free interest rate
        #[arg(short, long)]
        rate: f64,

        /// Volatility
        #[arg(long)]
        vol: f64,

        /// Futures price of the underlying
        #[arg(long)]
        spot: f64,

        /// Valuation date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let format: OutputFormat = cli.format.parse()?;

    match cli.command {
        Commands::Expiry {
            commodity,
            month,
            now,
        } => {
            let now = parse_now(now.as_deref())?;
            commands::expiry::run(&commodity, &month, now, format)?;
        }
        Commands::Price {
            expiry,
            strike,
            option_type,
            rate,
            vol,
            spot,
            today,
        } => {
            let args = commands::price::PriceArgs {
                expiry: pricer_core::types::Date::parse(&expiry).map_err(CliError::from)?,
                strike,
                option_type,
                rate,
                volatility: vol,
                spot,
                today: parse_today(today.as_deref())?,
            };
            commands::price::run(&args, format)?;
        }
        Commands::Value {
            file,
            rate,
            vol,
            spot,
            today,
        } => {
            let valuation_date = parse_today(today.as_deref())?;
            // Contracts are validated as of the start of the valuation date
            let now = match today {
                Some(_) => valuation_date.at_midnight(),
                None => parse_now(None)?,
            };
            let market = MarketParameters::new(rate, vol, spot);
            commands::value::run(&file, market, valuation_date, now, format)?;
        }
    }

    Ok(())
}
