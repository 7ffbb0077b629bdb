//! Error types for the Horizon client
//!
//! Every request either yields a decoded body or one of these errors. None of
//! them are retried by the client.

use thiserror::Error;

/// Main error type for the Horizon client
#[derive(Error, Debug)]
pub enum HorizonError {
    /// HTTP-specific errors
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HorizonError>;

/// HTTP-specific errors
#[derive(Error, Debug)]
pub enum HttpError {
    /// Server answered with a non-success status
    #[error("HTTP request failed with status {status} {reason}: {url}")]
    RequestFailed {
        /// The HTTP status code
        status: u16,
        /// The canonical reason phrase for the status
        reason: String,
        /// The requested URL
        url: String,
    },

    /// The request never produced a response
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// The requested URL
        url: String,
        /// The source error
        #[source]
        source: reqwest::Error,
    },

    /// Building the underlying HTTP client failed
    #[error("Failed to build HTTP client")]
    ClientBuilder(#[source] reqwest::Error),
}

/// Serialization/deserialization errors
#[derive(Error, Debug)]
pub enum SerializationError {
    /// JSON deserialization failed
    #[error("Failed to deserialize response from {url}: {source}")]
    JsonDeserialize {
        /// The requested URL
        url: String,
        /// The source error
        #[source]
        source: serde_json::Error,
    },
}

impl HorizonError {
    /// HTTP status of the response, when the failure was a non-success status
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(HttpError::RequestFailed { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// URL of the request that failed, if the error is tied to one
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::RequestFailed { url, .. })
            | Self::Http(HttpError::Transport { url, .. })
            | Self::Serialization(SerializationError::JsonDeserialize { url, .. }) => Some(url),
            _ => None,
        }
    }
}
