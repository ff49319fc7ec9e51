//! Vendor-agnostic SIEM data source inventory client.
//!
//! This crate defines the canonical [`DataSource`] schema, the [`Provider`]
//! contract every vendor integration implements, the [`ProviderRegistry`] that
//! maps a configured vendor type to a constructor, and the four built-in
//! integrations: Elasticsearch, Splunk, Microsoft Sentinel and IBM QRadar.

mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod provider;
pub mod providers;
pub mod registry;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{ApiKeyScheme, Credentials};
pub use client::{ApiClient, ApiClientBuilder};
pub use error::{ClientError, Result};
pub use models::{DataSource, Inventory, InventoryMetadata, Metadata, ProviderCapabilities};
pub use provider::Provider;
pub use registry::{ProviderFactory, ProviderKind, ProviderRegistry, registry};
