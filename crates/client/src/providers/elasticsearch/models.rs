//! Saved-object search responses from the `.kibana` index.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub hits: Hits,
}

#[derive(Debug, Default, Deserialize)]
pub struct Hits {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Hit {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub id: String,
    #[serde(
        rename = "_source",
        default,
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub source: SavedObject,
}

/// The `_source` of a saved object. Attributes live under a key named after
/// the object type.
#[derive(Debug, Default, Deserialize)]
pub struct SavedObject {
    #[serde(rename = "index-pattern", default)]
    pub index_pattern: Option<Attributes>,
    #[serde(rename = "data-view", default)]
    pub data_view: Option<Attributes>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Attributes {
    /// The index pattern expression, e.g. `logs-*`.
    #[serde(default)]
    pub title: Option<String>,
    /// Human display name; data views only.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "timeFieldName", default)]
    pub time_field_name: Option<String>,
}
