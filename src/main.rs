//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `invidious_relay` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use invidious_relay::{init_logger_with, run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env (if present) so RELAY_INSTANCE /
    // RELAY_PORT can be configured without exporting them manually.
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        eprintln!("invidious_relay error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
