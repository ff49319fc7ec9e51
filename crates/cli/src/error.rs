//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failure stages.
//! - Map library error types found in an `anyhow` chain to those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see `cancellation`).
//!
//! Invariants:
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).
//! - The first recognized error in the chain decides the code.

use logfiend_client::ClientError;
use logfiend_config::{ConfigError, SanitizeError, ValidationError};

use crate::cancellation::Cancelled;

/// Structured exit codes for `logfiend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure, including output writing.
    GeneralError = 1,

    /// The config or output path, the document, or its contents were rejected.
    ///
    /// Scripts should fix the configuration and not retry.
    ConfigError = 2,

    /// The vendor health probe failed (network, TLS, status, or deadline).
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// The inventory listing failed.
    FetchError = 4,

    /// The configured provider type is not registered.
    UnsupportedProvider = 5,

    /// Interrupted by SIGINT/Ctrl+C (128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::UnsupportedProvider { .. } => ExitCode::UnsupportedProvider,
            ClientError::Connection { .. } => ExitCode::ConnectionError,
            ClientError::Fetch { .. } => ExitCode::FetchError,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.is::<Cancelled>() {
                return ExitCode::Interrupted;
            }
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.is::<ConfigError>()
                || cause.is::<ValidationError>()
                || cause.is::<SanitizeError>()
            {
                return ExitCode::ConfigError;
            }
        }

        ExitCode::GeneralError
    }
}
