//! The per-run inventory envelope.

use chrono::{DateTime, Utc};
use logfiend_config::constants::GENERATED_BY;
use serde::Serialize;

use crate::models::DataSource;

/// Run metadata written ahead of the data sources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryMetadata {
    pub timestamp: DateTime<Utc>,
    pub provider: String,
    pub version: String,
    pub source_count: usize,
    pub generated_by: String,
}

/// The fetch result plus run metadata.
///
/// Fields are private so `source_count` cannot drift from the list it counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inventory {
    metadata: InventoryMetadata,
    data_sources: Vec<DataSource>,
}

impl Inventory {
    /// Assemble an inventory stamped with the current time.
    pub fn new(
        provider: impl Into<String>,
        version: impl Into<String>,
        data_sources: Vec<DataSource>,
    ) -> Self {
        Self::at(Utc::now(), provider, version, data_sources)
    }

    /// Assemble an inventory with an explicit generation time.
    pub fn at(
        timestamp: DateTime<Utc>,
        provider: impl Into<String>,
        version: impl Into<String>,
        data_sources: Vec<DataSource>,
    ) -> Self {
        Self {
            metadata: InventoryMetadata {
                timestamp,
                provider: provider.into(),
                version: version.into(),
                source_count: data_sources.len(),
                generated_by: GENERATED_BY.to_string(),
            },
            data_sources,
        }
    }

    pub fn metadata(&self) -> &InventoryMetadata {
        &self.metadata
    }

    pub fn data_sources(&self) -> &[DataSource] {
        &self.data_sources
    }

    pub fn source_count(&self) -> usize {
        self.metadata.source_count
    }
}
