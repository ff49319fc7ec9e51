//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set. Otherwise the filter comes from `logging.level`,
//! raised to `debug` by `--debug`. Log lines always go to stderr so stdout
//! stays reserved for run output.

use anyhow::{Context, Result};
use logfiend_config::{LogFormat, LoggingConfig};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber for this process.
pub fn init(config: &LoggingConfig, debug: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = if debug { "debug" } else { config.level.as_str() };
            EnvFilter::try_new(level)
                .with_context(|| format!("Invalid logging.level '{level}'"))?
        }
    };

    let (text, json) = match config.format {
        LogFormat::Text => (Some(fmt::layer().with_writer(std::io::stderr)), None),
        LogFormat::Json => (
            None,
            Some(fmt::layer().json().with_writer(std::io::stderr)),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
