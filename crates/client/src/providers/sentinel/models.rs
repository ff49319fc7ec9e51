//! Log Analytics table listing response.
//!
//! Every field tolerates `null` as well as a missing key.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct TableListResponse {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub value: Vec<Table>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Table {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub properties: TableProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableProperties {
    #[serde(default, deserialize_with = "crate::serde_helpers::i64_from_number_or_string")]
    pub retention_in_days: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::i64_from_number_or_string")]
    pub total_retention_in_days: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::i64_from_number_or_string")]
    pub archive_retention_in_days: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub plan: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub schema: TableSchema,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub display_name: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub columns: Vec<Column>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Column {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub name: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub column_type: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub description: String,
}
