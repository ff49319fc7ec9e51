//! Normalization and security policy for provider configuration.
//!
//! Responsibilities:
//! - Trim the endpoint and check it against the accepted URL grammar:
//!   `http(s)://host[:port][/path]`, host made of ASCII letters, digits, `-` and `.`.
//! - Enforce HTTPS for every host except loopback (`localhost`, `127.0.0.1`).
//! - Lower-case and trim `type` and `auth.type`; trim `auth.username`.
//! - Re-check the credentials the declared auth kind needs, using trimmed values.
//!
//! Does NOT handle:
//! - Presence checks on the raw document (see `validation`, which runs first).
//!
//! Invariants:
//! - Returns a new config; the input is left untouched.
//! - Idempotent: sanitizing a sanitized config yields an identical config.
//! - Secrets are read only to test for emptiness. They are never trimmed,
//!   logged, or copied into an error.

use thiserror::Error;

use crate::constants::LOOPBACK_HOSTS;
use crate::types::{AuthConfig, AuthKind, Config, ProviderConfig};

/// A configuration that fails normalization or security policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("invalid endpoint: endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("invalid endpoint: endpoint must be a valid HTTP/HTTPS URL")]
    MalformedEndpoint,

    #[error(
        "invalid endpoint: HTTP endpoints only allowed for localhost/127.0.0.1, use HTTPS for remote endpoint host '{host}'"
    )]
    InsecureEndpoint { host: String },

    #[error("provider type cannot be blank")]
    BlankProviderType,

    #[error("unsupported auth type: {0}")]
    UnsupportedAuthType(String),

    #[error("{kind} auth requires non-empty {field}")]
    BlankCredential {
        kind: AuthKind,
        field: &'static str,
    },
}

/// Sanitize a provider configuration, returning the normalized copy.
pub fn sanitize(config: &ProviderConfig) -> Result<ProviderConfig, SanitizeError> {
    let mut sanitized = config.clone();

    sanitized.endpoint = sanitize_endpoint(&config.endpoint)?;

    sanitized.provider_type = config.provider_type.trim().to_lowercase();
    if sanitized.provider_type.is_empty() {
        return Err(SanitizeError::BlankProviderType);
    }

    if let Some(auth) = sanitized.auth.as_mut() {
        sanitize_auth(auth)?;
    }

    Ok(sanitized)
}

fn sanitize_auth(auth: &mut AuthConfig) -> Result<(), SanitizeError> {
    auth.username = auth.username.trim().to_string();
    auth.auth_type = auth.auth_type.trim().to_lowercase();

    let kind = auth
        .kind()
        .ok_or_else(|| SanitizeError::UnsupportedAuthType(auth.auth_type.clone()))?;
    let blank = |field| SanitizeError::BlankCredential { kind, field };

    match kind {
        AuthKind::Basic => {
            if auth.username.is_empty() || auth.password_str().trim().is_empty() {
                return Err(blank("username and password"));
            }
        }
        AuthKind::Bearer => {
            if auth.token_str().trim().is_empty() {
                return Err(blank("token"));
            }
        }
        AuthKind::ApiKey => {
            if auth.api_key_str().trim().is_empty() {
                return Err(blank("api_key"));
            }
        }
    }

    Ok(())
}

/// Trim an endpoint and apply the URL grammar and scheme policy.
pub fn sanitize_endpoint(raw: &str) -> Result<String, SanitizeError> {
    let endpoint = raw.trim();
    if endpoint.is_empty() {
        return Err(SanitizeError::EmptyEndpoint);
    }

    let (secure, rest) = if let Some(rest) = endpoint.strip_prefix("https://") {
        (true, rest)
    } else if let Some(rest) = endpoint.strip_prefix("http://") {
        (false, rest)
    } else {
        return Err(SanitizeError::MalformedEndpoint);
    };

    let authority = rest.find('/').map_or(rest, |idx| &rest[..idx]);
    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    };

    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
    let port_ok = port.is_none_or(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    if !host_ok || !port_ok {
        return Err(SanitizeError::MalformedEndpoint);
    }

    // The grammar is looser than RFC 3986 in places (e.g. port range).
    url::Url::parse(endpoint).map_err(|_| SanitizeError::MalformedEndpoint)?;

    if !secure && !is_loopback(host) {
        return Err(SanitizeError::InsecureEndpoint {
            host: host.to_string(),
        });
    }

    Ok(endpoint.to_string())
}

fn is_loopback(host: &str) -> bool {
    LOOPBACK_HOSTS
        .iter()
        .any(|allowed| host.eq_ignore_ascii_case(allowed))
}

impl Config {
    /// Return a copy whose provider section has been sanitized.
    pub fn sanitized(&self) -> Result<Config, SanitizeError> {
        Ok(Config {
            provider: sanitize(&self.provider)?,
            ..self.clone()
        })
    }
}
