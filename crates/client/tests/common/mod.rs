//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the vendor integrations.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Provider configs point at a wiremock server over plain HTTP
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use logfiend_client::testing::load_fixture;
#[allow(unused_imports)]
pub use logfiend_client::{ClientError, DataSource, Provider, registry};
#[allow(unused_imports)]
pub use logfiend_config::{AuthConfig, ProviderConfig};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a provider of `provider_type` pointed at `endpoint`.
#[allow(dead_code)]
pub fn provider(
    provider_type: &str,
    endpoint: &str,
    auth: Option<AuthConfig>,
) -> Box<dyn Provider> {
    let mut config =
        ProviderConfig::new(provider_type, endpoint).with_timeout(Duration::from_secs(5));
    config.auth = auth;
    registry()
        .create(config)
        .unwrap_or_else(|e| panic!("failed to build {provider_type} provider: {e}"))
}
