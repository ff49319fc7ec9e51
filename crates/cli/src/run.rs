//! One inventory run, from config file to written artifact.
//!
//! Responsibilities:
//! - Gate the configuration: path checks, load, provider override, Validate, Sanitize.
//! - Resolve the provider through the registry.
//! - Honor dry-run and airgap modes.
//! - Run the connection check and fetch under one shared deadline, abandoning
//!   both on Ctrl+C.
//! - Wrap the result in an [`Inventory`] and write it.
//!
//! Invariants:
//! - Dry-run and airgap make zero network calls.
//! - Every failure is fatal; nothing is retried.
//! - Endpoints are printed only after redaction.

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use logfiend_client::{ClientError, DataSource, Inventory, Provider, registry};
use logfiend_config::{Config, load, validate_config_path};
use tokio::time::{Instant, timeout_at};
use tracing::{debug, info};

use crate::args::Cli;
use crate::cancellation::CancellationToken;
use crate::{logging, output};

/// Stand-in deadline for budgets too large to add to the clock.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Tool version: `LOGFIEND_VERSION` at build time, else the crate version.
pub fn version() -> &'static str {
    option_env!("LOGFIEND_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

pub async fn run(cli: Cli, cancel: &CancellationToken) -> Result<()> {
    if cli.verbose {
        println!("LogFiend - Vendor-agnostic SIEM data source inventory tool");
        println!("Config file: {}", cli.config.display());
        println!("Output file: {}", cli.output.display());
    }

    if cli.airgap {
        println!("Running in airgap mode - no network calls will be made");
        if cli.dry_run {
            println!("Airgap mode supersedes dry-run mode");
        }
    }

    let config_path = validate_config_path(&cli.config).context("Invalid config path")?;
    let output_path = output::check_output_path(&cli.output).context("Invalid output path")?;

    let mut config = load(&config_path).context("Failed to load config")?;
    logging::init(&config.logging, cli.debug)?;
    debug!(config = %config_path.display(), "Configuration loaded");

    if let Some(provider_type) = &cli.provider {
        if cli.verbose {
            println!(
                "Overriding provider: {} -> {}",
                config.provider.provider_type, provider_type
            );
        }
        config.provider.provider_type = provider_type.clone();
    }

    config.validate().context("Invalid configuration")?;
    let config = config.sanitized().context("Failed to sanitize config")?;

    let provider = registry()
        .create(config.provider.clone())
        .with_context(|| {
            format!(
                "Failed to initialize provider '{}'",
                config.provider.provider_type
            )
        })?;

    if cli.verbose {
        println!("Fetching data sources from {} provider...", provider.name());
        if provider.capabilities().requires_authentication {
            println!("Provider requires authentication");
        }
    }

    if cli.dry_run && !cli.airgap {
        print_plan(&config, provider.name(), &cli);
        return Ok(());
    }

    let sources = if cli.airgap {
        println!("Airgap mode: returning empty results");
        Vec::new()
    } else {
        collect(provider.as_ref(), cli.timeout, cli.verbose, cancel).await?
    };

    let inventory = Inventory::new(provider.name(), version(), sources);
    let bytes = output::serialize(&inventory, &config.output)?;

    let path = if config.output.timestamp {
        output::timestamped(&output_path, inventory.metadata().timestamp)
    } else {
        output_path
    };
    output::write_atomic(&path, &bytes).context("Error writing to output file")?;
    info!(path = %path.display(), count = inventory.source_count(), "Inventory written");

    println!(
        "{} data source inventory saved to {} ({} sources)",
        provider.name(),
        path.display(),
        inventory.source_count()
    );
    if cli.verbose && inventory.source_count() > 0 {
        print_summary(inventory.data_sources());
    }

    Ok(())
}

fn print_plan(config: &Config, provider_name: &str, cli: &Cli) {
    println!("DRY RUN MODE - No actual network calls will be made");
    println!(
        "Would connect to: {}",
        output::redact_endpoint(&config.provider.endpoint)
    );
    println!("Would use provider: {provider_name}");
    println!("Would save results to: {}", cli.output.display());
    println!("Would validate connection...");
}

/// Health check then fetch, sharing one deadline.
async fn collect(
    provider: &dyn Provider,
    budget: Duration,
    verbose: bool,
    cancel: &CancellationToken,
) -> Result<Vec<DataSource>> {
    let deadline = deadline_after(Instant::now(), budget);
    let name = provider.name();

    if verbose {
        println!("Validating connection...");
    }
    within(deadline, budget, provider.validate_connection(), |e| {
        ClientError::connection(name, e)
    }, cancel)
    .await
    .context("Connection validation failed")?;
    if verbose {
        println!("Connection validated successfully");
    }

    let sources = within(deadline, budget, provider.fetch_data_views(), |e| {
        ClientError::fetch(name, e)
    }, cancel)
    .await
    .with_context(|| format!("Error retrieving data views from {name}"))?;

    Ok(sources)
}

/// `now + budget`, clamped to a far-future instant when the sum does not fit.
fn deadline_after(now: Instant, budget: Duration) -> Instant {
    now.checked_add(budget)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}

/// Await `call` until the shared deadline or cancellation.
///
/// An elapsed deadline is reported through `wrap` so it lands in the same
/// error stage as the call it interrupted.
async fn within<T>(
    deadline: Instant,
    budget: Duration,
    call: impl Future<Output = logfiend_client::Result<T>>,
    wrap: impl FnOnce(ClientError) -> ClientError,
    cancel: &CancellationToken,
) -> Result<T> {
    match cancel.run(timeout_at(deadline, call)).await? {
        Ok(result) => Ok(result?),
        Err(_elapsed) => Err(wrap(ClientError::Timeout(budget)).into()),
    }
}

fn print_summary(sources: &[DataSource]) {
    println!("\nSummary by type:");
    for (source_type, count) in count_by_type(sources) {
        println!("  {source_type}: {count}");
    }
}

fn count_by_type(sources: &[DataSource]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for ds in sources {
        *counts.entry(ds.source_type.as_str()).or_insert(0) += 1;
    }
    counts
}
