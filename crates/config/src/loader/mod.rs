//! Configuration loader for YAML documents.
//!
//! Responsibilities:
//! - Enforce path safety before touching the file system.
//! - Read the document and deserialize it, filling defaults for absent fields.
//!
//! Does NOT handle:
//! - Validation or sanitization (callers run `Config::validate` and
//!   `Config::sanitized` on the result).
//!
//! Invariants / Assumptions:
//! - Absolute paths and paths outside `.` or `examples/` are never read.
//! - An empty document yields `Config::default()`.

mod error;
mod path;

#[cfg(test)]
mod tests;

use std::path::Path;

use tracing::debug;

use crate::types::Config;

pub use error::ConfigError;
pub use path::{check_relative_path, validate_config_path};

/// Load the configuration document at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = validate_config_path(path.as_ref())?;
    debug!(path = %path.display(), "Loading configuration");

    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    parse_config(&contents).map_err(|source| ConfigError::Parse { path, source })
}

/// Parse a configuration document from YAML text.
pub fn parse_config(contents: &str) -> Result<Config, serde_yaml::Error> {
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(contents)
}
