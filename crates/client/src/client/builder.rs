//! Builder for constructing [`ApiClient`] instances.
//!
//! This module is responsible for:
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification, pinned headers)
//!
//! # What this module does NOT handle:
//! - Issuing requests (handled by [`ApiClient`] in `mod.rs`)
//! - Choosing credentials (handled by each integration)
//!
//! # Invariants
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::auth::{ApiKeyScheme, Credentials};
use crate::client::ApiClient;
use crate::error::{ClientError, Result};
use logfiend_config::{ProviderConfig, constants::DEFAULT_TIMEOUT_SECS};

/// Builder for creating a new [`ApiClient`].
pub struct ApiClientBuilder {
    base_url: Option<String>,
    credentials: Credentials,
    api_key_scheme: ApiKeyScheme,
    skip_verify: bool,
    timeout: Duration,
    headers: HeaderMap,
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: Credentials::Anonymous,
            api_key_scheme: ApiKeyScheme::Unsupported,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            headers: HeaderMap::new(),
        }
    }
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. Trailing slashes are removed.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn api_key_scheme(mut self, scheme: ApiKeyScheme) -> Self {
        self.api_key_scheme = scheme;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Disabling verification exposes the connection to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pin a header on every request, e.g. a vendor API version.
    pub fn default_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers
            .insert(HeaderName::from_static(name), HeaderValue::from_static(value));
        self
    }

    /// Seed endpoint, timeout and TLS settings from a provider config.
    ///
    /// Credentials are left to the caller since their mapping is vendor-specific.
    pub fn from_provider_config(mut self, config: &ProviderConfig) -> Self {
        self.base_url = Some(config.endpoint.clone());
        self.timeout = config.timeout;
        self.skip_verify = config.skip_tls_verify();
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`ApiClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<ApiClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.headers);

        if self.skip_verify {
            if base_url.starts_with("https://") {
                tracing::warn!(
                    base_url = %base_url,
                    "TLS certificate verification is disabled (tls.insecure_skip_verify)"
                );
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "insecure_skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(ApiClient {
            http,
            base_url,
            credentials: self.credentials,
            api_key_scheme: self.api_key_scheme,
        })
    }
}
