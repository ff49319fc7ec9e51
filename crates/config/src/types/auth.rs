//! Authentication types for provider configuration.
//!
//! Responsibilities:
//! - Define the declared authentication block (`type` plus kind-specific fields).
//! - Deserialize secret values straight into `secrecy::SecretString`.
//! - Map the declared `type` string onto the closed set of supported kinds.
//!
//! Does NOT handle:
//! - Building request headers (see the client crate; header schemes are per vendor).
//! - Presence checks of required fields (see `validation` and `sanitize`).
//!
//! Invariants:
//! - `password`, `token` and `api_key` never appear in `Debug` output.
//! - Fields not required by the declared kind are kept as-is, never cleared.

use std::fmt;
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Module for deserializing optional secrets.
mod secret_string_opt {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Supported authentication kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthKind {
    /// Username and password (HTTP Basic).
    Basic,
    /// Bearer token.
    Bearer,
    /// Vendor-specific API key.
    ApiKey,
}

impl AuthKind {
    /// Canonical lowercase spelling used in configuration documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Bearer => "bearer",
            Self::ApiKey => "api_key",
        }
    }
}

impl fmt::Display for AuthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthKind {
    type Err = ();

    /// Parse a declared kind. Case and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "bearer" => Ok(Self::Bearer),
            "api_key" => Ok(Self::ApiKey),
            _ => Err(()),
        }
    }
}

/// Authentication block of a provider configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Declared kind: `basic`, `bearer` or `api_key`.
    #[serde(rename = "type", default)]
    pub auth_type: String,
    /// Username for basic auth.
    #[serde(default)]
    pub username: String,
    /// Password for basic auth.
    #[serde(default, with = "secret_string_opt")]
    pub password: Option<SecretString>,
    /// Token for bearer auth.
    #[serde(default, with = "secret_string_opt")]
    pub token: Option<SecretString>,
    /// Key for api_key auth.
    #[serde(default, with = "secret_string_opt")]
    pub api_key: Option<SecretString>,
}

impl AuthConfig {
    /// Basic auth with the given credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        let password: String = password.into();
        Self {
            auth_type: AuthKind::Basic.as_str().to_string(),
            username: username.into(),
            password: Some(SecretString::new(password.into())),
            ..Self::default()
        }
    }

    /// Bearer auth with the given token.
    pub fn bearer(token: impl Into<String>) -> Self {
        let token: String = token.into();
        Self {
            auth_type: AuthKind::Bearer.as_str().to_string(),
            token: Some(SecretString::new(token.into())),
            ..Self::default()
        }
    }

    /// API key auth with the given key.
    pub fn api_key(key: impl Into<String>) -> Self {
        let key: String = key.into();
        Self {
            auth_type: AuthKind::ApiKey.as_str().to_string(),
            api_key: Some(SecretString::new(key.into())),
            ..Self::default()
        }
    }

    /// The declared kind, if it is one of the supported ones.
    pub fn kind(&self) -> Option<AuthKind> {
        self.auth_type.parse().ok()
    }

    /// Password as plain text, empty when absent.
    pub fn password_str(&self) -> &str {
        expose_or_empty(self.password.as_ref())
    }

    /// Token as plain text, empty when absent.
    pub fn token_str(&self) -> &str {
        expose_or_empty(self.token.as_ref())
    }

    /// API key as plain text, empty when absent.
    pub fn api_key_str(&self) -> &str {
        expose_or_empty(self.api_key.as_ref())
    }
}

fn expose_or_empty(secret: Option<&SecretString>) -> &str {
    secret.map(|s| s.expose_secret()).unwrap_or("")
}
