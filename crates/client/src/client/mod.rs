//! Shared HTTP plumbing for vendor integrations.
//!
//! Responsibilities:
//! - Join request paths onto a normalized base URL.
//! - Attach credentials using the vendor's API key scheme.
//! - Turn non-success statuses into [`ClientError::ApiError`] and decode JSON bodies.
//!
//! Does NOT handle:
//! - Retries. A failed call is terminal; callers decide what to do.
//! - Vendor payload shapes (see `providers`).

pub mod builder;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::{ApiKeyScheme, Credentials};
use crate::error::{ClientError, Result};

pub use builder::ApiClientBuilder;

/// An HTTP client bound to one vendor endpoint and its credentials.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) api_key_scheme: ApiKeyScheme,
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_credentials(&self) -> bool {
        !self.credentials.is_anonymous()
    }

    /// Start an authenticated GET for `path` (which must begin with `/`).
    pub fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.credentials
            .apply(self.http.get(url), self.api_key_scheme)
    }

    /// Send a request and require a success status.
    ///
    /// The error carries the status and the response body.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        debug!(url = %url, status = status.as_u16(), "Vendor API response");

        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        Err(ClientError::ApiError {
            status: status.as_u16(),
            url,
            message,
        })
    }

    /// Send a request and decode the JSON body.
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("failed to decode response: {e}")))
    }

    /// Issue a health probe. Only the status matters.
    pub async fn probe(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "Health probe response");

        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::ApiError {
                status: status.as_u16(),
                url: response.url().to_string(),
                message: format!("health check failed with status: {}", status.as_u16()),
            })
        }
    }
}
