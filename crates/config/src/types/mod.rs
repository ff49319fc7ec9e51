//! Configuration type definitions for LogFiend.
//!
//! Responsibilities:
//! - Define the configuration document: provider, output and logging sections.
//! - Provide deserialization helpers for sensitive types (secrets) and durations.
//!
//! Does NOT handle:
//! - Reading the document from disk (see `loader` module).
//! - Validation or normalization (see `validation` and `sanitize` modules).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Defaults are provided via `Default` impls and `constants`, not magic numbers.

mod auth;
mod provider;
mod settings;

pub use auth::{AuthConfig, AuthKind};
pub use provider::{ProviderConfig, TlsConfig, parse_duration};
pub use settings::{Config, LogFormat, LoggingConfig, OutputConfig, OutputFormat};
