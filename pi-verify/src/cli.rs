//! CLI argument parsing

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

/// Parse and validate the request timeout (1-600 seconds)
fn parse_timeout(s: &str) -> Result<u64, String> {
    let secs: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number of seconds", s))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    if secs > 600 {
        return Err(format!("timeout {} is too large (maximum: 600)", secs));
    }
    Ok(secs)
}

/// Cross-check a ledger operation against its transaction, effects and account
#[derive(Parser, Debug)]
#[command(name = "verify_pi_operation")]
#[command(about = "Cross-check a Pi ledger operation against its transaction, effects and account")]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 15, value_parser = parse_timeout)]
    pub timeout: u64,

    /// Id of the operation to verify
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub operation_id: String,

    /// Root URL of the Horizon API; when omitted or empty, $API_BASE and then
    /// https://api.mainnet.minepi.com are used
    pub api_base: Option<String>,
}
