//! Centralized constants for the LogFiend workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retries. Advisory only; no component retries today.
pub const DEFAULT_RETRIES: u32 = 3;

/// Hosts that may be reached over plain `http://`.
pub const LOOPBACK_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

// =============================================================================
// Output & Logging Defaults
// =============================================================================

/// Default path of the configuration document.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Default path of the inventory artifact.
pub const DEFAULT_OUTPUT_PATH: &str = "datasource_inventory.json";

/// Default output format.
pub const DEFAULT_OUTPUT_FORMAT: &str = "json";

/// Default log level when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// The only directory (besides `.`) a configuration document may live in.
pub const CONFIG_DIR_ALLOWED: &str = "examples";

/// The only directory (besides `.`) the inventory may be written to.
pub const OUTPUT_DIR_ALLOWED: &str = "output";

// =============================================================================
// Inventory
// =============================================================================

/// Fixed generator tag stamped into every inventory envelope.
pub const GENERATED_BY: &str = "logfiend";
