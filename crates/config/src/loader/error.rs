//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for path safety, read and parse failures.
//!
//! Does NOT handle:
//! - Structural validation of a parsed document (see `validation`).
//! - Normalization and endpoint policy (see `sanitize`).
//!
//! Invariants:
//! - Every variant names the offending path.
//! - Parse errors carry the YAML location but never echo document contents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating, reading, or parsing a document.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("absolute paths not allowed for security: {}", path.display())]
    AbsolutePath { path: PathBuf },

    #[error("path traversal not allowed: {}", path.display())]
    PathTraversal { path: PathBuf },

    #[error("path is empty")]
    EmptyPath,

    #[error("config file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
