//! Main client implementation

use std::time::Duration;
use url::Url;

use crate::error::{HorizonError, Result};
use crate::http::HttpClient;
use crate::types::{Account, EffectsPage, Operation, Transaction};

/// Public Horizon endpoint used when no other base is configured
pub const DEFAULT_API_BASE: &str = "https://api.mainnet.minepi.com";

/// Configuration for the Horizon client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root URL of the Horizon API
    pub base_url: Url,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of idle connections kept per host
    pub max_connections: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            timeout: Duration::from_secs(15),
            max_connections: 10,
        }
    }
}

/// Builder for creating a configured Horizon client
#[derive(Debug)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Create a new client builder
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Set the API base URL
    pub fn base_url(mut self, url: Url) -> Self {
        self.config.base_url = url;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the maximum number of idle connections per host
    pub fn max_connections(mut self, max: usize) -> Self {
        self.config.max_connections = max;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<Client> {
        Client::new(self.config)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only Horizon client
#[derive(Clone, Debug)]
pub struct Client {
    config: ClientConfig,
    http_client: HttpClient,
}

impl Client {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base = &config.base_url;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(HorizonError::Configuration(format!(
                "unsupported URL scheme '{}' in {}",
                base.scheme(),
                base
            )));
        }
        if base.cannot_be_a_base() {
            return Err(HorizonError::Configuration(format!(
                "{} cannot be used as an API base",
                base
            )));
        }

        tracing::debug!("Creating Horizon client for {}", base);
        let http_client = HttpClient::new(&config)?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create a client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }

    /// Get the client configuration
    pub fn get_config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{base}/operations/{id}`
    pub fn operation_url(&self, operation_id: &str) -> Url {
        self.endpoint(&["operations", operation_id])
    }

    /// `{base}/transactions/{hash}`
    pub fn transaction_url(&self, hash: &str) -> Url {
        self.endpoint(&["transactions", hash])
    }

    /// `{base}/operations/{id}/effects`
    pub fn operation_effects_url(&self, operation_id: &str) -> Url {
        self.endpoint(&["operations", operation_id, "effects"])
    }

    /// `{base}/accounts/{id}`
    pub fn account_url(&self, account_id: &str) -> Url {
        self.endpoint(&["accounts", account_id])
    }

    /// Append percent-encoded path segments to the base URL
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.config.base_url.clone();
        // Validated in `Client::new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Fetch a single operation
    pub async fn get_operation(&self, operation_id: &str) -> Result<Operation> {
        self.http_client
            .get_json(self.operation_url(operation_id))
            .await
    }

    /// Fetch a transaction by hash
    pub async fn get_transaction(&self, hash: &str) -> Result<Transaction> {
        self.http_client.get_json(self.transaction_url(hash)).await
    }

    /// Fetch the first page of effects produced by an operation
    pub async fn get_operation_effects(&self, operation_id: &str) -> Result<EffectsPage> {
        self.http_client
            .get_json(self.operation_effects_url(operation_id))
            .await
    }

    /// Fetch an account
    pub async fn get_account(&self, account_id: &str) -> Result<Account> {
        self.http_client.get_json(self.account_url(account_id)).await
    }
}
