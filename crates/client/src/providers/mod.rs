//! Vendor integrations.
//!
//! Each submodule owns one vendor: its wire models, its credential mapping,
//! and the converter from vendor records to [`crate::DataSource`].

pub mod elasticsearch;
pub mod qradar;
pub mod sentinel;
pub mod splunk;

pub use elasticsearch::ElasticsearchProvider;
pub use qradar::QRadarProvider;
pub use sentinel::SentinelProvider;
pub use splunk::SplunkProvider;

use chrono::{DateTime, SecondsFormat, Utc};

/// Epoch milliseconds to a whole-second instant. Non-positive values are absent.
pub(crate) fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    if millis <= 0 {
        return None;
    }
    DateTime::from_timestamp(millis / 1000, 0)
}

/// RFC 3339 text used for timestamps copied into metadata.
pub(crate) fn rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
