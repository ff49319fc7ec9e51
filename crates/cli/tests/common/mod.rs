//! Shared test utilities for logfiend integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory rooted in a scratch working directory.
//! - Write configuration documents where the path allow-list accepts them.
//!
//! Invariants / Assumptions:
//! - Every test gets its own `TempDir`; relative paths resolve inside it.
//! - `RUST_LOG` is cleared so the config file decides the log level.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a hermetic `logfiend` command running inside `dir`.
#[allow(dead_code)]
pub fn logfiend_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logfiend");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

/// Create a scratch working directory.
pub fn workdir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

/// Write `examples/<name>` under `dir` and return its relative path.
pub fn write_config(dir: &Path, name: &str, yaml: &str) -> PathBuf {
    let examples = dir.join("examples");
    std::fs::create_dir_all(&examples).expect("failed to create examples dir");
    std::fs::write(examples.join(name), yaml).expect("failed to write config");
    Path::new("examples").join(name)
}

/// Read and parse a JSON artifact relative to `dir`.
#[allow(dead_code)]
pub fn read_json(dir: &Path, rel: &str) -> serde_json::Value {
    let text = std::fs::read_to_string(dir.join(rel)).expect("failed to read output");
    serde_json::from_str(&text).expect("output is not valid JSON")
}
