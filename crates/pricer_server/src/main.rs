//! Black-76 Pricer Server
//!
//! REST API for commodity option records and their valuation.

use clap::Parser;
use pricer_server::config::{build_config, env_vars, CliArgs as ConfigCliArgs};
use pricer_server::server::Server;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Black-76 Pricer Server - REST API for commodity option valuation
#[derive(Parser, Debug)]
#[command(name = "pricer_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = env_vars::HOST)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = env_vars::PORT)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = env_vars::LOG_LEVEL)]
    log_level: Option<String>,

    /// Load the demonstration option book at start-up
    #[arg(
        long,
        env = env_vars::SEED_DEMO_DATA,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    seed_demo_data: Option<bool>,

    /// Default and maximum page size for list endpoints
    #[arg(long, env = env_vars::PAGE_LIMIT)]
    page_limit: Option<usize>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            seed_demo_data: args.seed_demo_data,
            page_limit: args.page_limit,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!("Black-76 Pricer Server v{}", pricer_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        environment = %config.environment,
        seed_demo_data = %config.should_seed_demo_data(),
        page_limit = %config.page_limit,
        "Server configuration loaded"
    );

    let server = Server::new(config);
    tracing::info!(address = %server.config().socket_addr(), "Starting server");

    server.run().await?;

    Ok(())
}
