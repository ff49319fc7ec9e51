//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the flag set with clap derive macros.
//! - Parse the run deadline with the same duration grammar as the config file.
//!
//! Non-responsibilities:
//! - Does not check paths (see `output` and the config crate's path helpers).
//! - Does not drive the run (see `run` module).

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use logfiend_config::constants::{DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH};
use logfiend_config::parse_duration;

#[derive(Parser, Debug)]
#[command(name = "logfiend")]
#[command(
    about = "LogFiend - Vendor-agnostic SIEM data source inventory tool",
    long_about = None
)]
#[command(disable_version_flag = true)]
#[command(
    after_help = "Examples:\n  logfiend --config examples/splunk.yml --output output/splunk.json\n  logfiend --provider qradar --dry-run\n  logfiend --airgap --verbose\n"
)]
pub struct Cli {
    /// Path to the configuration file (bare name, or under examples/)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Path to save the data source inventory (bare name, or under output/)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Override the provider type from the config file
    #[arg(long, value_name = "TYPE")]
    pub provider: Option<String>,

    /// Deadline for the whole run: connection check plus fetch (e.g. 30, 45s, 2m)
    #[arg(long, value_name = "DURATION", default_value = "30", value_parser = parse_duration)]
    pub timeout: Duration,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Show what would be done without making network calls
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Run with no network calls; writes an empty inventory
    #[arg(long)]
    pub airgap: bool,

    /// Show version information
    #[arg(long)]
    pub version: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["logfiend"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.yml"));
        assert_eq!(cli.output, PathBuf::from("datasource_inventory.json"));
        assert_eq!(cli.timeout, Duration::from_secs(30));
        assert!(cli.provider.is_none());
        assert!(!cli.dry_run && !cli.airgap && !cli.verbose && !cli.debug);
    }

    #[test]
    fn test_timeout_accepts_suffixes() {
        let cli = Cli::try_parse_from(["logfiend", "--timeout", "2m"]).unwrap();
        assert_eq!(cli.timeout, Duration::from_secs(120));

        let cli = Cli::try_parse_from(["logfiend", "--timeout", "750ms"]).unwrap();
        assert_eq!(cli.timeout, Duration::from_millis(750));

        assert!(Cli::try_parse_from(["logfiend", "--timeout", "soon"]).is_err());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "logfiend",
            "--config",
            "examples/qradar.yml",
            "--output",
            "output/qradar.csv",
            "--provider",
            "QRadar",
            "--verbose",
            "--dry-run",
            "--debug",
            "--airgap",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("examples/qradar.yml"));
        assert_eq!(cli.output, PathBuf::from("output/qradar.csv"));
        assert_eq!(cli.provider.as_deref(), Some("QRadar"));
        assert!(cli.verbose && cli.dry_run && cli.debug && cli.airgap);
    }
}
