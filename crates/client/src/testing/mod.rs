//! Fixture loading for vendor integration tests.
//!
//! Compiled for this crate's own tests and, through the `test-utils` feature,
//! for downstream crates that replay vendor responses against a mock server.
//! Fixtures live under `fixtures/<vendor>/` at the crate root.

use std::path::{Path, PathBuf};

/// Absolute path of a fixture, e.g. `fixture_path("qradar/log_sources.json")`.
pub fn fixture_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(relative)
}

/// Load and parse a JSON fixture.
///
/// # Panics
/// If the file is missing or is not valid JSON; a broken fixture is a broken test.
pub fn load_fixture(relative: &str) -> serde_json::Value {
    let path = fixture_path(relative);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Invalid JSON in fixture {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_vendor_has_fixtures() {
        for vendor in ["elasticsearch", "splunk", "sentinel", "qradar"] {
            assert!(fixture_path(vendor).is_dir(), "missing fixtures for {vendor}");
        }
    }

    #[test]
    fn test_qradar_fixture_is_a_list() {
        assert!(load_fixture("qradar/log_sources.json").is_array());
    }
}
