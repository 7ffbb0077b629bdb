//! verify_pi_operation - cross-check a Pi ledger operation
//!
//! Fetches an operation, its parent transaction, its effects and the account
//! it touches, and prints a summary for manual auditing.

use anyhow::Result;

use clap::Parser;
use std::process;

mod cli;
mod config;
mod error;
mod output;
mod verify;

use cli::Cli;
use config::Config;
use error::{CliError, EXIT_FAILURE};
use output::{OutputFormat, TextReport};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use verify::VerificationReport;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    // Usage errors exit with status 2 here
    let cli = Cli::parse();

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => fail(&CliError::from(err), OutputFormat::from_json_flag(cli.json)),
    };

    if let Err(err) = execute(&config, &cli.operation_id).await {
        fail(&err, config.output);
    }

    Ok(())
}

fn fail(err: &CliError, format: OutputFormat) -> ! {
    tracing::debug!("verification failed: {:?}", err);
    output::print_error(err, format);
    process::exit(EXIT_FAILURE);
}

async fn execute(config: &Config, operation_id: &str) -> Result<(), CliError> {
    let client = config.client()?;

    match config.output {
        OutputFormat::Text => verify::run(&client, operation_id, &mut TextReport).await,
        OutputFormat::Json => {
            let mut report = VerificationReport::default();
            verify::run(&client, operation_id, &mut report).await?;
            output::print_json(&report);
            Ok(())
        }
    }
}
