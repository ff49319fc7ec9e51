//! Index listing response from `/services/data/indexes`.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct IndexListResponse {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub entry: Vec<IndexEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexEntry {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub content: IndexContent,
}

/// Index properties. Numeric-looking fields keep their string form.
#[derive(Debug, Default, Deserialize)]
pub struct IndexContent {
    #[serde(
        rename = "maxTotalDataSizeMB",
        default,
        deserialize_with = "crate::serde_helpers::opt_string_from_number_or_string"
    )]
    pub max_total_data_size_mb: Option<String>,
    #[serde(
        rename = "currentDBSizeMB",
        default,
        deserialize_with = "crate::serde_helpers::opt_string_from_number_or_string"
    )]
    pub current_db_size_mb: Option<String>,
    #[serde(
        rename = "totalEventCount",
        default,
        deserialize_with = "crate::serde_helpers::opt_string_from_number_or_string"
    )]
    pub total_event_count: Option<String>,
    #[serde(
        rename = "minTime",
        default,
        deserialize_with = "crate::serde_helpers::opt_string_from_number_or_string"
    )]
    pub min_time: Option<String>,
    #[serde(
        rename = "isInternal",
        default,
        deserialize_with = "crate::serde_helpers::bool_from_flag"
    )]
    pub is_internal: bool,
    #[serde(rename = "datatype", default)]
    pub data_type: Option<String>,
    #[serde(rename = "homePath", default)]
    pub home_path: Option<String>,
    #[serde(rename = "coldPath", default)]
    pub cold_path: Option<String>,
    #[serde(rename = "thawedPath", default)]
    pub thawed_path: Option<String>,
}
