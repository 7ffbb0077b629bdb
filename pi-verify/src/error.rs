//! Error types for the verifier CLI

use pi_horizon_client::{HorizonError, HttpError};
use thiserror::Error;

/// Exit status for any failure after argument parsing
pub const EXIT_FAILURE: i32 = 1;

/// Main error type for the verifier CLI
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A Horizon request failed
    #[error("{0}")]
    Request(#[from] HorizonError),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl CliError {
    /// Short machine-readable category used in JSON error output
    pub fn error_type(&self) -> &'static str {
        match self {
            CliError::Config(_) => "config",
            CliError::Request(HorizonError::Http(HttpError::RequestFailed { .. })) => "http",
            CliError::Request(HorizonError::Http(_)) => "transport",
            CliError::Request(HorizonError::Serialization(_)) => "serialization",
            CliError::Request(HorizonError::Configuration(_)) => "config",
        }
    }
}
