//! Configuration management for LogFiend.
//!
//! This crate owns the configuration document: its types, the YAML loader with
//! path safety, and the two pure gates every provider config passes before use,
//! [`validate`] (presence) followed by [`sanitize`] (normalization and policy).

pub mod constants;
mod loader;
pub mod sanitize;
pub mod types;
pub mod validation;

pub use loader::{ConfigError, check_relative_path, load, parse_config, validate_config_path};
pub use sanitize::{SanitizeError, sanitize, sanitize_endpoint};
pub use types::{
    AuthConfig, AuthKind, Config, LogFormat, LoggingConfig, OutputConfig, OutputFormat,
    ProviderConfig, TlsConfig, parse_duration,
};
pub use validation::{ValidationError, validate};
