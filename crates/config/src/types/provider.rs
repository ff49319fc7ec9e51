//! Provider connection configuration.
//!
//! Responsibilities:
//! - Define the `provider` section of the configuration document.
//! - Parse `timeout` from integer seconds or a suffixed duration string.
//!
//! Does NOT handle:
//! - Validation or normalization (see `validation` and `sanitize`).
//! - Building HTTP clients (see the client crate).
//!
//! Invariants:
//! - `timeout` defaults to 30 seconds and `retries` to 3.
//! - `options` is an open map; unknown keys are preserved.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::{DEFAULT_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;

/// Module for deserializing a duration from seconds or a suffixed string.
mod duration_flexible {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SecondsOrText {
        Seconds(u64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        match SecondsOrText::deserialize(deserializer)? {
            SecondsOrText::Seconds(secs) => Ok(Duration::from_secs(secs)),
            SecondsOrText::Text(text) => parse(&text).map_err(D::Error::custom),
        }
    }

    /// Parse `500ms`, `30s`, `2m`, `1h`, or a bare number of seconds.
    pub fn parse(text: &str) -> Result<Duration, String> {
        let text = text.trim();
        let split = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let (digits, unit) = text.split_at(split);
        let value: u64 = digits
            .parse()
            .map_err(|_| format!("invalid duration '{text}'"))?;

        let secs_per_unit = match unit {
            "" | "s" => 1,
            "ms" => return Ok(Duration::from_millis(value)),
            "m" => 60,
            "h" => 3600,
            other => return Err(format!("unknown duration unit '{other}' in '{text}'")),
        };
        value
            .checked_mul(secs_per_unit)
            .map(Duration::from_secs)
            .ok_or_else(|| format!("invalid duration '{text}'"))
    }
}

pub use duration_flexible::parse as parse_duration;

/// TLS settings for the vendor connection.
///
/// Only `insecure_skip_verify` changes behavior; the file paths are carried for
/// completeness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TlsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub insecure_skip_verify: bool,
    #[serde(default)]
    pub cert_file: Option<String>,
    #[serde(default)]
    pub key_file: Option<String>,
    #[serde(default)]
    pub ca_file: Option<String>,
}

impl TlsConfig {
    /// Whether certificate verification should be disabled.
    pub fn skips_verification(&self) -> bool {
        self.enabled && self.insecure_skip_verify
    }
}

/// Configuration for one vendor integration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Vendor key, matched case-insensitively against the registry.
    #[serde(rename = "type", default)]
    pub provider_type: String,
    /// Base URL of the vendor API.
    #[serde(default)]
    pub endpoint: String,
    /// Free-form vendor options.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub auth: Option<AuthConfig>,
    #[serde(default)]
    pub tls: Option<TlsConfig>,
    /// Per-request timeout.
    #[serde(default = "default_timeout", with = "duration_flexible")]
    pub timeout: Duration,
    /// Advisory retry count.
    #[serde(default = "default_retries")]
    pub retries: u32,
}

pub(crate) fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

pub(crate) fn default_retries() -> u32 {
    DEFAULT_RETRIES
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: String::new(),
            endpoint: String::new(),
            options: BTreeMap::new(),
            auth: None,
            tls: None,
            timeout: default_timeout(),
            retries: default_retries(),
        }
    }
}

impl ProviderConfig {
    /// Create a config for the given vendor and endpoint with default settings.
    pub fn new(provider_type: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            provider_type: provider_type.into(),
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Attach an authentication block.
    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Attach TLS settings.
    pub fn with_tls(mut self, tls: TlsConfig) -> Self {
        self.tls = Some(tls);
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether certificate verification is disabled for this provider.
    pub fn skip_tls_verify(&self) -> bool {
        self.tls.as_ref().is_some_and(TlsConfig::skips_verification)
    }
}
