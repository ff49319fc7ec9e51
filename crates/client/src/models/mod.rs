//! Canonical data model shared by every vendor integration.
//!
//! Responsibilities:
//! - Define `DataSource`, the vendor-neutral record each converter produces.
//! - Define the `Inventory` envelope written once per run.
//! - Define `ProviderCapabilities`, the static descriptor of an integration.
//!
//! Does NOT handle:
//! - Vendor wire formats (see `providers::*::models`).
//! - Serialization to files (see the CLI crate).
//!
//! Invariants:
//! - `Inventory::source_count` always equals the number of data sources.
//! - `DataSource::metadata` never carries credentials.

mod capabilities;
mod data_source;
mod inventory;

pub use capabilities::ProviderCapabilities;
pub use data_source::{DataSource, Metadata};
pub use inventory::{Inventory, InventoryMetadata};
