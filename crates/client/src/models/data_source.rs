//! The canonical data source record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Open map of vendor-specific facts.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// One inventoried object: an index, index pattern, table or log source.
///
/// Optional fields are omitted from serialized output when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    /// Vendor-native identifier. Not unique across vendors.
    pub id: String,
    pub name: String,
    /// Display name; may equal `name`.
    pub title: String,
    /// Vendor-qualified type tag, e.g. `splunk-index`.
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: Metadata,
}

impl DataSource {
    /// Create a record with the required identity fields set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        title: impl Into<String>,
        source_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: title.into(),
            source_type: source_type.into(),
            ..Self::default()
        }
    }

    /// Whether the record carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
