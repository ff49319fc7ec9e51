//! Splunk indexes.
//!
//! One listing request; each index becomes a `splunk-index` data source whose
//! status and tag reflect the internal/external split.

pub mod models;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::auth::{ApiKeyScheme, Credentials};
use crate::client::ApiClient;
use crate::error::{ClientError, Result};
use crate::models::{DataSource, ProviderCapabilities};
use crate::provider::Provider;
use logfiend_config::ProviderConfig;

use models::{IndexEntry, IndexListResponse};

pub const NAME: &str = "splunk";

const INDEXES_PATH: &str = "/services/data/indexes";
const SERVER_INFO_PATH: &str = "/services/server/info";

/// Layout of `minTime`, e.g. `2024-01-15T08:30:00.000+00:00`.
const MIN_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

pub struct SplunkProvider {
    client: ApiClient,
}

impl SplunkProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = ApiClient::builder()
            .from_provider_config(config)
            .credentials(Credentials::from_config(config.auth.as_ref()))
            .api_key_scheme(ApiKeyScheme::Authorization("Splunk"))
            .build()
            .map_err(|e| ClientError::Construction {
                provider: NAME,
                source: Box::new(e),
            })?;
        Ok(Self { client })
    }

    /// Registry constructor.
    pub fn create(config: ProviderConfig) -> Result<Box<dyn Provider>> {
        Ok(Box::new(Self::new(&config)?))
    }

    async fn list_indexes(&self) -> Result<Vec<DataSource>> {
        let request = self
            .client
            .get(INDEXES_PATH)
            .query(&[("output_mode", "json"), ("count", "0")]);
        let response: IndexListResponse = self.client.send_json(request).await?;
        Ok(response.entry.into_iter().map(convert_index).collect())
    }
}

#[async_trait]
impl Provider for SplunkProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn validate_connection(&self) -> Result<()> {
        let request = self
            .client
            .get(SERVER_INFO_PATH)
            .query(&[("output_mode", "json")]);
        self.client
            .probe(request)
            .await
            .map_err(|e| ClientError::connection(NAME, e))
    }

    async fn fetch_data_views(&self) -> Result<Vec<DataSource>> {
        self.list_indexes()
            .await
            .map_err(|e| ClientError::fetch(NAME, e))
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            supports_real_time_queries: true,
            supports_historical_data: true,
            supported_data_types: &["splunk-index", "summary-index"],
            requires_authentication: self.client.has_credentials(),
        }
    }
}

/// Convert one index entry.
pub fn convert_index(entry: IndexEntry) -> DataSource {
    let content = entry.content;
    let mut ds = DataSource::new(
        entry.name.clone(),
        entry.name.clone(),
        entry.name.clone(),
        "splunk-index",
    );
    ds.pattern = format!("index={}", entry.name);

    if content.is_internal {
        ds.status = "internal".to_string();
        ds.tags = vec!["internal".to_string()];
    } else {
        ds.status = "active".to_string();
        ds.tags = vec!["external".to_string()];
    }

    let fields = [
        ("maxSizeMB", content.max_total_data_size_mb),
        ("currentSizeMB", content.current_db_size_mb),
        ("totalEventCount", content.total_event_count),
        ("dataType", content.data_type),
        ("homePath", content.home_path),
        ("coldPath", content.cold_path),
        ("thawedPath", content.thawed_path),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            ds.metadata.insert(key.to_string(), Value::String(value));
        }
    }

    ds.created_at = content.min_time.as_deref().and_then(parse_min_time);
    ds
}

/// Parse `minTime`; empty, `"0"` and malformed values are absent.
fn parse_min_time(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() || raw == "0" {
        return None;
    }
    DateTime::parse_from_str(raw, MIN_TIME_FORMAT)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
