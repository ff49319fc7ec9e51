//! Provider registry: vendor key to constructor.
//!
//! Responsibilities:
//! - Enumerate the built-in vendors as a closed [`ProviderKind`] set.
//! - Map lower-case type names to constructors and build providers on demand.
//!
//! Does NOT handle:
//! - Validating or sanitizing configuration (callers do that first).
//!
//! Invariants:
//! - Keys are stored lower-case; lookup trims and lower-cases the requested type.
//! - The process-wide registry is built once on first use and never mutated after.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{ClientError, Result};
use crate::provider::Provider;
use crate::providers::{ElasticsearchProvider, QRadarProvider, SentinelProvider, SplunkProvider};
use logfiend_config::ProviderConfig;

/// Constructor for a provider instance.
pub type ProviderFactory = fn(ProviderConfig) -> Result<Box<dyn Provider>>;

/// The built-in vendor integrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProviderKind {
    Elasticsearch,
    Splunk,
    Sentinel,
    QRadar,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Elasticsearch,
        ProviderKind::Splunk,
        ProviderKind::Sentinel,
        ProviderKind::QRadar,
    ];

    /// Registry key, as written in `provider.type`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Elasticsearch => "elasticsearch",
            Self::Splunk => "splunk",
            Self::Sentinel => "sentinel",
            Self::QRadar => "qradar",
        }
    }

    pub fn factory(self) -> ProviderFactory {
        match self {
            Self::Elasticsearch => ElasticsearchProvider::create,
            Self::Splunk => SplunkProvider::create,
            Self::Sentinel => SentinelProvider::create,
            Self::QRadar => QRadarProvider::create,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProviderKind {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| ClientError::UnsupportedProvider {
                requested: s.to_string(),
                available: Self::ALL.iter().map(|k| k.key().to_string()).collect(),
            })
    }
}

/// Mapping from vendor key to constructor.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    factories: BTreeMap<String, ProviderFactory>,
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("available", &self.available())
            .finish()
    }
}

impl ProviderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every [`ProviderKind`].
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for kind in ProviderKind::ALL {
            registry.register(kind.key(), kind.factory());
        }
        registry
    }

    /// Register a constructor under `name` (stored lower-case). A later
    /// registration under the same name replaces the earlier one.
    pub fn register(&mut self, name: &str, factory: ProviderFactory) {
        self.factories.insert(name.trim().to_lowercase(), factory);
    }

    /// Registered names in sorted order.
    pub fn available(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.trim().to_lowercase())
    }

    /// Build the provider named by `config.provider_type`.
    pub fn create(&self, config: ProviderConfig) -> Result<Box<dyn Provider>> {
        let key = config.provider_type.trim().to_lowercase();
        let Some(factory) = self.factories.get(&key) else {
            return Err(ClientError::UnsupportedProvider {
                requested: config.provider_type,
                available: self.available(),
            });
        };
        debug!(provider = %key, "Constructing provider");
        factory(config)
    }
}

/// The process-wide registry of built-in providers.
pub fn registry() -> &'static ProviderRegistry {
    static REGISTRY: OnceLock<ProviderRegistry> = OnceLock::new();
    REGISTRY.get_or_init(ProviderRegistry::builtin)
}
