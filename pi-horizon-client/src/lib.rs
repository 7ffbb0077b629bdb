//! Rust client for the Pi ledger Horizon HTTP API
//!
//! This crate provides an async, read-only client for the handful of Horizon
//! endpoints needed to cross-reference an operation with its transaction,
//! effects and account.
//!
//! # Example
//!
//! ```no_run
//! use pi_horizon_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .base_url(url::Url::parse("https://api.mainnet.minepi.com")?)
//!         .build()?;
//!
//!     let operation = client.get_operation("123456789").await?;
//!     println!("Operation type: {:?}", operation.op_type);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod error;
pub mod http;
pub mod types;

// Re-export main types
pub use client::{Client, ClientBuilder, ClientConfig, DEFAULT_API_BASE};
pub use error::{HorizonError, HttpError, Result, SerializationError};

pub use types::{
    // Account types
    Account,
    Balance,
    // Common types
    Embedded,
    Page,
    Signer,
    // Effect types
    Effect,
    EffectsPage,
    // Operation types
    Operation,
    // Transaction types
    Transaction,
    NATIVE_ASSET_TYPE,
};

/// Get the version of this client library
pub fn client_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
