//! Presence validation of provider configuration.
//!
//! Responsibilities:
//! - Check that `type` and `endpoint` are present.
//! - Check that a declared auth block names a supported kind and carries the
//!   fields that kind requires.
//!
//! Does NOT handle:
//! - Trimming, case folding, or URL policy (see `sanitize`).
//!
//! Invariants:
//! - Pure: never mutates the config and never performs I/O.
//! - Error messages name the field, never its value.

use thiserror::Error;

use crate::types::{AuthConfig, AuthKind, Config, ProviderConfig};

/// A structurally invalid configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("provider type is required")]
    MissingProviderType,

    #[error("provider endpoint is required")]
    MissingEndpoint,

    #[error("invalid auth config: unsupported auth type: {0}")]
    UnsupportedAuthType(String),

    #[error("invalid auth config: {kind} auth requires {field}")]
    MissingAuthField {
        kind: AuthKind,
        field: &'static str,
    },
}

/// Validate a provider configuration.
///
/// Runs before [`crate::sanitize`]; whitespace-only values pass here and are
/// caught there.
pub fn validate(config: &ProviderConfig) -> Result<(), ValidationError> {
    if config.provider_type.is_empty() {
        return Err(ValidationError::MissingProviderType);
    }
    if config.endpoint.is_empty() {
        return Err(ValidationError::MissingEndpoint);
    }

    if let Some(auth) = &config.auth {
        validate_auth(auth)?;
    }

    Ok(())
}

fn validate_auth(auth: &AuthConfig) -> Result<(), ValidationError> {
    let kind = auth
        .kind()
        .ok_or_else(|| ValidationError::UnsupportedAuthType(auth.auth_type.clone()))?;

    let missing = |field| ValidationError::MissingAuthField { kind, field };

    match kind {
        AuthKind::Basic => {
            if auth.username.is_empty() || auth.password_str().is_empty() {
                return Err(missing("username and password"));
            }
        }
        AuthKind::Bearer => {
            if auth.token_str().is_empty() {
                return Err(missing("token"));
            }
        }
        AuthKind::ApiKey => {
            if auth.api_key_str().is_empty() {
                return Err(missing("api_key"));
            }
        }
    }

    Ok(())
}

impl Config {
    /// Validate the provider section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.provider)
    }
}
