//! Static capability descriptor of a vendor integration.

use serde::Serialize;

/// What an integration supports. Carries no per-instance state beyond
/// whether authentication is mandatory for the configured instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderCapabilities {
    pub supports_real_time_queries: bool,
    pub supports_historical_data: bool,
    /// `type` tags the integration may emit.
    pub supported_data_types: &'static [&'static str],
    pub requires_authentication: bool,
}

impl ProviderCapabilities {
    /// Whether `source_type` is one of the advertised tags.
    pub fn supports_type(&self, source_type: &str) -> bool {
        self.supported_data_types.contains(&source_type)
    }
}
