//! Log source records from the log source management API.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct LogSource {
    #[serde(default, deserialize_with = "crate::serde_helpers::i64_from_number_or_string")]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::i64_from_number_or_string")]
    pub type_id: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::i64_from_number_or_string")]
    pub protocol_type_id: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::bool_from_flag")]
    pub enabled: bool,
    #[serde(default, deserialize_with = "crate::serde_helpers::bool_from_flag")]
    pub gateway: bool,
    #[serde(default, deserialize_with = "crate::serde_helpers::bool_from_flag")]
    pub internal: bool,
    #[serde(default, deserialize_with = "crate::serde_helpers::i64_from_number_or_string")]
    pub credibility: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::i64_from_number_or_string")]
    pub target_event_rate: i64,
    /// Epoch milliseconds.
    #[serde(default, deserialize_with = "crate::serde_helpers::i64_from_number_or_string")]
    pub creation_date: i64,
    /// Epoch milliseconds.
    #[serde(default, deserialize_with = "crate::serde_helpers::i64_from_number_or_string")]
    pub modified_date: i64,
    /// Epoch milliseconds.
    #[serde(default, deserialize_with = "crate::serde_helpers::i64_from_number_or_string")]
    pub last_event_time: i64,
    #[serde(default)]
    pub status: Option<LogSourceStatus>,
    #[serde(default, deserialize_with = "crate::serde_helpers::bool_from_flag")]
    pub auto_discovered: bool,
    #[serde(default, deserialize_with = "crate::serde_helpers::i64_from_number_or_string")]
    pub average_eps: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogSourceStatus {
    /// Epoch milliseconds.
    #[serde(default, deserialize_with = "crate::serde_helpers::i64_from_number_or_string")]
    pub last_seen: i64,
    /// Kept verbatim; QRadar versions differ between strings and objects.
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub messages: Vec<serde_json::Value>,
}
