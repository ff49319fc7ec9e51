//! Error types for vendor integrations.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while constructing or driving a provider.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No integration is registered under the requested type.
    #[error("unsupported provider type: {requested} (available: {})", available.join(", "))]
    UnsupportedProvider {
        requested: String,
        available: Vec<String>,
    },

    /// The integration could not be built from its configuration.
    #[error("failed to construct {provider} provider")]
    Construction {
        provider: &'static str,
        #[source]
        source: Box<ClientError>,
    },

    /// The health probe failed.
    #[error("connection validation failed for {provider}")]
    Connection {
        provider: &'static str,
        #[source]
        source: Box<ClientError>,
    },

    /// The listing request failed or could not be converted.
    #[error("failed to fetch data sources from {provider}")]
    Fetch {
        provider: &'static str,
        #[source]
        source: Box<ClientError>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status from the vendor API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The vendor answered with a body that could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The shared run deadline elapsed.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

impl ClientError {
    /// Wrap an error raised by a health probe.
    pub fn connection(provider: &'static str, source: ClientError) -> Self {
        Self::Connection {
            provider,
            source: Box::new(source),
        }
    }

    /// Wrap an error raised while fetching inventory.
    pub fn fetch(provider: &'static str, source: ClientError) -> Self {
        Self::Fetch {
            provider,
            source: Box::new(source),
        }
    }

    /// HTTP status carried by this error or the error it wraps.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            Self::Construction { source, .. }
            | Self::Connection { source, .. }
            | Self::Fetch { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Whether the root cause is an elapsed deadline.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::HttpError(e) => e.is_timeout(),
            Self::Construction { source, .. }
            | Self::Connection { source, .. }
            | Self::Fetch { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}
