//! Microsoft Sentinel (Log Analytics workspace tables).
//!
//! Responsibilities:
//! - Derive subscription, resource group and workspace from the endpoint path.
//! - List workspace tables through the management API at a pinned `api-version`.
//! - Convert each table's schema into a [`DataSource`].
//!
//! Invariants:
//! - Requests go to the origin of the configured endpoint.
//! - A bearer header is sent whenever a token is present, whatever the
//!   declared auth type. Basic and API key credentials are never sent.

pub mod models;

use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::{Value, json};

use crate::auth::{ApiKeyScheme, Credentials};
use crate::client::ApiClient;
use crate::error::{ClientError, Result};
use crate::models::{DataSource, ProviderCapabilities};
use crate::provider::Provider;
use logfiend_config::{AuthConfig, AuthKind, ProviderConfig};

use models::{Table, TableListResponse};

pub const NAME: &str = "azure-sentinel";

pub const API_VERSION: &str = "2022-10-01";

/// Workspace coordinates parsed from an ARM resource path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRef {
    pub subscription_id: String,
    pub resource_group: String,
    pub workspace_name: String,
}

impl WorkspaceRef {
    /// Parse `/subscriptions/{s}/resourceGroups/{rg}/providers/Microsoft.OperationalInsights/workspaces/{w}`.
    ///
    /// Segments are taken by position; at least eight are required.
    pub fn from_endpoint(endpoint: &str) -> Result<Self> {
        let url = url::Url::parse(endpoint)
            .map_err(|e| ClientError::InvalidUrl(format!("invalid workspace endpoint: {e}")))?;
        let parts: Vec<&str> = url.path().trim_matches('/').split('/').collect();
        if parts.len() < 8 {
            return Err(ClientError::InvalidUrl(format!(
                "invalid Azure workspace URL format: expected /subscriptions/<id>/resourceGroups/<name>/providers/Microsoft.OperationalInsights/workspaces/<name>, found {} path segment(s)",
                parts.iter().filter(|p| !p.is_empty()).count()
            )));
        }
        Ok(Self {
            subscription_id: parts[1].to_string(),
            resource_group: parts[3].to_string(),
            workspace_name: parts[7].to_string(),
        })
    }

    /// Management API path of the workspace resource.
    pub fn path(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.OperationalInsights/workspaces/{}",
            self.subscription_id, self.resource_group, self.workspace_name
        )
    }
}

pub struct SentinelProvider {
    client: ApiClient,
    endpoint: String,
}

impl SentinelProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let construction = |e: ClientError| ClientError::Construction {
            provider: NAME,
            source: Box::new(e),
        };
        let origin = origin_of(&config.endpoint).map_err(construction)?;
        let client = ApiClient::builder()
            .from_provider_config(config)
            .base_url(origin)
            .credentials(credentials(config.auth.as_ref()))
            .api_key_scheme(ApiKeyScheme::Unsupported)
            .build()
            .map_err(construction)?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Registry constructor.
    pub fn create(config: ProviderConfig) -> Result<Box<dyn Provider>> {
        Ok(Box::new(Self::new(&config)?))
    }

    async fn list_tables(&self) -> Result<Vec<DataSource>> {
        let workspace = WorkspaceRef::from_endpoint(&self.endpoint)?;
        let request = self
            .client
            .get(&format!("{}/tables", workspace.path()))
            .query(&[("api-version", API_VERSION)]);
        let response: TableListResponse = self.client.send_json(request).await?;

        Ok(response
            .value
            .into_iter()
            .map(|table| convert_table(table, &workspace.workspace_name))
            .collect())
    }

    async fn probe_workspace(&self) -> Result<()> {
        let workspace = WorkspaceRef::from_endpoint(&self.endpoint)?;
        let request = self
            .client
            .get(&workspace.path())
            .query(&[("api-version", API_VERSION)]);
        self.client.probe(request).await
    }
}

#[async_trait]
impl Provider for SentinelProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn validate_connection(&self) -> Result<()> {
        self.probe_workspace()
            .await
            .map_err(|e| ClientError::connection(NAME, e))
    }

    async fn fetch_data_views(&self) -> Result<Vec<DataSource>> {
        self.list_tables()
            .await
            .map_err(|e| ClientError::fetch(NAME, e))
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            supports_real_time_queries: true,
            supports_historical_data: true,
            supported_data_types: &["log-analytics-table", "custom-table"],
            requires_authentication: true,
        }
    }
}

/// Bearer for declared bearer auth, and for any other declared type that
/// still carries a token.
fn credentials(auth: Option<&AuthConfig>) -> Credentials {
    let Some(auth) = auth else {
        return Credentials::Anonymous;
    };
    let token = auth.token_str();
    if auth.kind() == Some(AuthKind::Bearer) || !token.is_empty() {
        Credentials::Bearer(SecretString::new(token.to_string().into()))
    } else {
        Credentials::Anonymous
    }
}

fn origin_of(endpoint: &str) -> Result<String> {
    let url = url::Url::parse(endpoint)
        .map_err(|e| ClientError::InvalidUrl(format!("invalid workspace endpoint: {e}")))?;
    Ok(url.origin().ascii_serialization())
}

/// Convert one table record.
pub fn convert_table(table: Table, workspace_name: &str) -> DataSource {
    let properties = table.properties;
    let schema = properties.schema;

    let mut ds = DataSource::new(
        table.id.clone(),
        schema.name.clone(),
        schema.display_name,
        "log-analytics-table",
    );
    ds.pattern = schema.name.clone();
    ds.description = schema.description;
    ds.status = "active".to_string();

    ds.tags = vec!["azure".to_string(), "sentinel".to_string()];
    if schema.name.ends_with("_CL") {
        ds.tags.push("custom".to_string());
    }
    if properties.plan == "Analytics" {
        ds.tags.push("analytics".to_string());
    }

    let metadata = &mut ds.metadata;
    metadata.insert("workspace".to_string(), json!(workspace_name));
    metadata.insert("retentionDays".to_string(), json!(properties.retention_in_days));
    metadata.insert(
        "totalRetention".to_string(),
        json!(properties.total_retention_in_days),
    );
    metadata.insert(
        "archiveRetention".to_string(),
        json!(properties.archive_retention_in_days),
    );
    metadata.insert("plan".to_string(), json!(properties.plan));
    metadata.insert("columnCount".to_string(), json!(schema.columns.len()));
    metadata.insert("resourceId".to_string(), json!(table.id));

    if !schema.columns.is_empty() {
        let columns: Vec<Value> = schema
            .columns
            .into_iter()
            .map(|c| json!({"name": c.name, "type": c.column_type, "description": c.description}))
            .collect();
        metadata.insert("columns".to_string(), Value::Array(columns));
    }

    ds
}
