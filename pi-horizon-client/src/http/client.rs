//! HTTP client implementation

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use crate::client::ClientConfig;
use crate::error::{HttpError, Result, SerializationError};

/// HTTP client for Horizon GET requests
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.max_connections)
            .user_agent(format!("pi-horizon-client/{}", crate::client_version()))
            .build()
            .map_err(HttpError::ClientBuilder)?;

        Ok(Self { client })
    }

    /// Send a GET request and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| HttpError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::RequestFailed {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url: url.to_string(),
            }
            .into());
        }

        let body = response.text().await.map_err(|e| HttpError::Transport {
            url: url.to_string(),
            source: e,
        })?;

        tracing::trace!("response: {:?}", body);

        serde_json::from_str(&body).map_err(|e| {
            SerializationError::JsonDeserialize {
                url: url.to_string(),
                source: e,
            }
            .into()
        })
    }
}
