//! Elasticsearch / Kibana index patterns and data views.
//!
//! Responsibilities:
//! - Query `.kibana/_search` for `index-pattern` and `data-view` saved objects.
//! - Convert each hit into a [`DataSource`] typed after the query that found it.
//!
//! Invariants:
//! - Both listings run concurrently under the caller's deadline.
//! - One failed listing is tolerated; results are patterns first, then views.
//!   Only when both fail is an error returned, wrapping the data-view error.

pub mod models;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::auth::{ApiKeyScheme, Credentials};
use crate::client::ApiClient;
use crate::error::{ClientError, Result};
use crate::models::{DataSource, ProviderCapabilities};
use crate::provider::Provider;
use logfiend_config::ProviderConfig;

use models::{Hit, SearchResponse};

pub const NAME: &str = "elasticsearch";

const SEARCH_PATH: &str = "/.kibana/_search";
const HEALTH_PATH: &str = "/_aliases";
const SEARCH_SIZE: u32 = 1000;

/// The two saved-object kinds the integration lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedObjectKind {
    IndexPattern,
    DataView,
}

impl SavedObjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IndexPattern => "index-pattern",
            Self::DataView => "data-view",
        }
    }

    fn query(self) -> Value {
        json!({
            "query": { "term": { "type": self.as_str() } },
            "size": SEARCH_SIZE,
        })
    }
}

pub struct ElasticsearchProvider {
    client: ApiClient,
}

impl ElasticsearchProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = ApiClient::builder()
            .from_provider_config(config)
            .credentials(Credentials::from_config(config.auth.as_ref()))
            .api_key_scheme(ApiKeyScheme::Authorization("ApiKey"))
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

    async fn search(&self, kind: SavedObjectKind) -> Result<Vec<DataSource>> {
        debug!(kind = kind.as_str(), "Searching saved objects");
        let request = self.client.get(SEARCH_PATH).json(&kind.query());
        let response: SearchResponse = self.client.send_json(request).await?;

        Ok(response
            .hits
            .hits
            .into_iter()
            .map(|hit| convert_hit(hit, kind))
            .collect())
    }
}

#[async_trait]
impl Provider for ElasticsearchProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn validate_connection(&self) -> Result<()> {
        self.client
            .probe(self.client.get(HEALTH_PATH))
            .await
            .map_err(|e| ClientError::connection(NAME, e))
    }

    async fn fetch_data_views(&self) -> Result<Vec<DataSource>> {
        let (patterns, views) = tokio::join!(
            self.search(SavedObjectKind::IndexPattern),
            self.search(SavedObjectKind::DataView)
        );
        merge_partial(patterns, views)
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            supports_real_time_queries: true,
            supports_historical_data: true,
            supported_data_types: &["index-pattern", "data-view"],
            requires_authentication: self.client.has_credentials(),
        }
    }
}

/// Combine the two listings under the partial-failure policy.
pub(crate) fn merge_partial(
    patterns: Result<Vec<DataSource>>,
    views: Result<Vec<DataSource>>,
) -> Result<Vec<DataSource>> {
    match (patterns, views) {
        (Ok(mut patterns), Ok(views)) => {
            patterns.extend(views);
            Ok(patterns)
        }
        (Ok(patterns), Err(e)) => {
            warn!(error = %e, "Data view listing failed; keeping index patterns");
            Ok(patterns)
        }
        (Err(e), Ok(views)) => {
            warn!(error = %e, "Index pattern listing failed; keeping data views");
            Ok(views)
        }
        (Err(first), Err(last)) => {
            warn!(error = %first, "Index pattern listing failed");
            Err(ClientError::fetch(NAME, last))
        }
    }
}

/// Convert one saved-object hit.
pub fn convert_hit(hit: Hit, kind: SavedObjectKind) -> DataSource {
    let attributes = match kind {
        SavedObjectKind::IndexPattern => hit.source.index_pattern,
        SavedObjectKind::DataView => hit.source.data_view,
    }
    .unwrap_or_default();

    let mut ds = DataSource::new(hit.id, "", "", kind.as_str());
    ds.tags = vec![NAME.to_string(), kind.as_str().to_string()];

    if let Some(title) = attributes.title.filter(|t| !t.is_empty()) {
        ds.name = title.clone();
        ds.pattern = title.clone();
        ds.title = title;
    }
    if let Some(display) = attributes.name.filter(|n| !n.is_empty()) {
        if ds.name.is_empty() {
            ds.name = display.clone();
        }
        ds.title = display;
    }
    if let Some(time_field) = attributes.time_field_name {
        ds.metadata
            .insert("timeField".to_string(), Value::String(time_field));
    }

    ds.updated_at = hit
        .source
        .updated_at
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Utc));

    ds
}
