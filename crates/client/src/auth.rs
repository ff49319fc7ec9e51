//! Credential resolution and per-vendor authorization headers.
//!
//! Basic and bearer auth look the same for every vendor. API keys do not:
//! each integration declares an [`ApiKeyScheme`] describing where the key goes.

use reqwest::RequestBuilder;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use logfiend_config::{AuthConfig, AuthKind};

/// Where a vendor expects its API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyScheme {
    /// `Authorization: <prefix> <key>`.
    Authorization(&'static str),
    /// A dedicated header carrying the raw key.
    Header(&'static str),
    /// The vendor has no API key mode; keys are ignored.
    Unsupported,
}

/// Credentials resolved from configuration, ready to attach to requests.
#[derive(Debug, Clone, Default)]
pub enum Credentials {
    #[default]
    Anonymous,
    Basic {
        username: String,
        password: SecretString,
    },
    Bearer(SecretString),
    ApiKey(SecretString),
}

impl Credentials {
    /// Resolve credentials by strict dispatch on the declared auth kind.
    ///
    /// Unknown kinds resolve to `Anonymous`; the config gate rejects them first.
    pub fn from_config(auth: Option<&AuthConfig>) -> Self {
        let Some(auth) = auth else {
            return Self::Anonymous;
        };
        match auth.kind() {
            Some(AuthKind::Basic) => Self::Basic {
                username: auth.username.clone(),
                password: secret(auth.password_str()),
            },
            Some(AuthKind::Bearer) => Self::Bearer(secret(auth.token_str())),
            Some(AuthKind::ApiKey) => Self::ApiKey(secret(auth.api_key_str())),
            None => Self::Anonymous,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// Attach the credentials to a request.
    pub fn apply(&self, builder: RequestBuilder, scheme: ApiKeyScheme) -> RequestBuilder {
        match self {
            Self::Anonymous => builder,
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Self::Bearer(token) => builder.bearer_auth(token.expose_secret()),
            Self::ApiKey(key) => match scheme {
                ApiKeyScheme::Authorization(prefix) => sensitive_header(
                    builder,
                    AUTHORIZATION.as_str(),
                    format!("{prefix} {}", key.expose_secret()),
                ),
                ApiKeyScheme::Header(name) => {
                    sensitive_header(builder, name, key.expose_secret().to_string())
                }
                ApiKeyScheme::Unsupported => builder,
            },
        }
    }
}

fn secret(value: &str) -> SecretString {
    SecretString::new(value.to_string().into())
}

fn sensitive_header(builder: RequestBuilder, name: &str, value: String) -> RequestBuilder {
    match HeaderValue::from_str(&value) {
        Ok(mut header) => {
            header.set_sensitive(true);
            builder.header(name, header)
        }
        // Surfaces as a builder error on send, without the value.
        Err(_) => builder.header(name, value),
    }
}
