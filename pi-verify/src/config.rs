//! Configuration resolution for the verifier
//!
//! The API base comes from the positional argument, then the `API_BASE`
//! environment variable, then the built-in default. Empty values at any
//! layer count as unset.

use pi_horizon_client::{Client, DEFAULT_API_BASE};
use std::time::Duration;
use url::Url;

use crate::cli::Cli;
use crate::error::{CliError, ConfigError};
use crate::output::OutputFormat;

/// Environment variable overriding the default API base
pub const API_BASE_ENV: &str = "API_BASE";

/// Resolved settings for one verification run
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the Horizon API
    pub api_base: Url,
    /// Per-request timeout
    pub timeout: Duration,
    /// How the report is printed
    pub output: OutputFormat,
}

impl Config {
    /// Build the configuration from parsed arguments and the environment
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let env_api_base = std::env::var(API_BASE_ENV).ok();
        Self::resolve(
            cli.api_base.as_deref(),
            env_api_base.as_deref(),
            Duration::from_secs(cli.timeout),
            OutputFormat::from_json_flag(cli.json),
        )
    }

    /// Pick the first non-empty API base of argument, environment and default
    pub fn resolve(
        arg_api_base: Option<&str>,
        env_api_base: Option<&str>,
        timeout: Duration,
        output: OutputFormat,
    ) -> Result<Self, ConfigError> {
        let raw = [arg_api_base, env_api_base]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE);

        // Scheme is checked by `Client::new`
        let api_base =
            Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", raw, e)))?;

        Ok(Self {
            api_base,
            timeout,
            output,
        })
    }

    /// Create a Horizon client for this configuration
    pub fn client(&self) -> Result<Client, CliError> {
        let client = Client::builder()
            .base_url(self.api_base.clone())
            .timeout(self.timeout)
            .build()?;
        Ok(client)
    }
}
