//! IBM QRadar log sources.
//!
//! One listing request with an explicit field projection. Every request,
//! including the health probe, carries the pinned `Version` header.

pub mod models;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::auth::{ApiKeyScheme, Credentials};
use crate::client::ApiClient;
use crate::error::{ClientError, Result};
use crate::models::{DataSource, ProviderCapabilities};
use crate::provider::Provider;
use crate::providers::{from_epoch_millis, rfc3339};
use logfiend_config::ProviderConfig;

use models::LogSource;

pub const NAME: &str = "qradar";

pub const API_VERSION: &str = "15.0";

const LOG_SOURCES_PATH: &str = "/api/config/event_sources/log_source_management/log_sources";
const ABOUT_PATH: &str = "/api/system/about";
const LOG_SOURCE_FIELDS: &str = "id,name,description,type_id,protocol_type_id,enabled,gateway,internal,credibility,target_event_rate,creation_date,modified_date,last_event_time,status,auto_discovered,average_eps";

pub struct QRadarProvider {
    client: ApiClient,
}

impl QRadarProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = ApiClient::builder()
            .from_provider_config(config)
            .credentials(Credentials::from_config(config.auth.as_ref()))
            .api_key_scheme(ApiKeyScheme::Header("SEC"))
            .default_header("version", API_VERSION)
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

    async fn list_log_sources(&self) -> Result<Vec<DataSource>> {
        let request = self
            .client
            .get(LOG_SOURCES_PATH)
            .query(&[("fields", LOG_SOURCE_FIELDS)]);
        let sources: Vec<LogSource> = self.client.send_json(request).await?;
        Ok(sources.into_iter().map(convert_log_source).collect())
    }
}

#[async_trait]
impl Provider for QRadarProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn validate_connection(&self) -> Result<()> {
        self.client
            .probe(self.client.get(ABOUT_PATH))
            .await
            .map_err(|e| ClientError::connection(NAME, e))
    }

    async fn fetch_data_views(&self) -> Result<Vec<DataSource>> {
        self.list_log_sources()
            .await
            .map_err(|e| ClientError::fetch(NAME, e))
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            supports_real_time_queries: true,
            supports_historical_data: true,
            supported_data_types: &["qradar-log-source", "qradar-flow-source"],
            requires_authentication: true,
        }
    }
}

/// Convert one log source record.
pub fn convert_log_source(source: LogSource) -> DataSource {
    let name = source.name.unwrap_or_default();
    let mut ds = DataSource::new(
        source.id.to_string(),
        name.clone(),
        name,
        "qradar-log-source",
    );
    ds.description = source.description.unwrap_or_default();
    ds.status = if source.enabled { "enabled" } else { "disabled" }.to_string();

    ds.tags.push(NAME.to_string());
    ds.tags
        .push(if source.internal { "internal" } else { "external" }.to_string());
    if source.gateway {
        ds.tags.push("gateway".to_string());
    }
    if source.auto_discovered {
        ds.tags.push("auto-discovered".to_string());
    }

    ds.created_at = from_epoch_millis(source.creation_date);
    ds.updated_at = from_epoch_millis(source.modified_date);

    let metadata = &mut ds.metadata;
    metadata.insert("typeId".to_string(), json!(source.type_id));
    metadata.insert("protocolTypeId".to_string(), json!(source.protocol_type_id));
    metadata.insert("credibility".to_string(), json!(source.credibility));
    metadata.insert("targetEventRate".to_string(), json!(source.target_event_rate));
    metadata.insert("averageEPS".to_string(), json!(source.average_eps));
    metadata.insert("gateway".to_string(), json!(source.gateway));
    metadata.insert("internal".to_string(), json!(source.internal));
    metadata.insert("autoDiscovered".to_string(), json!(source.auto_discovered));

    if let Some(last_event) = from_epoch_millis(source.last_event_time) {
        metadata.insert("lastEventTime".to_string(), json!(rfc3339(last_event)));
    }
    if let Some(status) = source.status {
        if let Some(last_seen) = from_epoch_millis(status.last_seen) {
            metadata.insert("lastSeen".to_string(), json!(rfc3339(last_seen)));
        }
        if !status.messages.is_empty() {
            metadata.insert("statusMessages".to_string(), Value::Array(status.messages));
        }
    }

    ds
}
