//! The capability contract every vendor integration implements.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{DataSource, ProviderCapabilities};

/// A vendor integration.
///
/// Lifecycle: constructed, then optionally `validate_connection`, then
/// `fetch_data_views`. Neither call retries. Dropping a returned future aborts
/// its in-flight request, which is how a caller-imposed deadline cancels work.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Display name used in inventory metadata and log lines.
    ///
    /// May differ from the registry key (`sentinel` reports `azure-sentinel`).
    fn name(&self) -> &'static str;

    /// Issue a lightweight health request. Never fetches inventory.
    ///
    /// Errors are [`crate::ClientError::Connection`].
    async fn validate_connection(&self) -> Result<()>;

    /// List every vendor record and convert it to a [`DataSource`].
    ///
    /// Safe to call without a prior `validate_connection`. Errors are
    /// [`crate::ClientError::Fetch`].
    async fn fetch_data_views(&self) -> Result<Vec<DataSource>>;

    /// Static description of the integration. No I/O.
    fn capabilities(&self) -> ProviderCapabilities;
}
