//! LogFiend - vendor-agnostic SIEM data source inventory.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Install the Ctrl+C listener and drive one inventory run.
//! - Report failures on stderr and exit with a structured code.
//!
//! Does NOT handle:
//! - Vendor API access (see `crates/client`).
//! - Configuration parsing and policy (see `crates/config`).
//!
//! Invariants:
//! - The tracing subscriber is installed only after the config file is read,
//!   since the log level and format come from it.

mod args;
mod cancellation;
mod error;
mod logging;
mod output;
mod run;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("LogFiend version {}", run::version());
        std::process::exit(ExitCode::Success.as_i32());
    }

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run::run(cli, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
