//! End-to-end inventory runs against mocked vendor APIs.
//!
//! Each test points a config at a wiremock server on 127.0.0.1 (the one
//! plain-HTTP host the endpoint policy accepts) and checks the written
//! artifact and the exit code.

mod common;

use common::{logfiend_cmd, read_json, workdir, write_config};
use logfiend_client::testing::load_fixture;
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn splunk_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .and(header("Authorization", "Splunk sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("splunk/server_info.json")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/data/indexes"))
        .and(header("Authorization", "Splunk sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("splunk/indexes.json")))
        .mount(&server)
        .await;
    server
}

fn splunk_config(endpoint: &str, output: &str) -> String {
    format!(
        r#"
provider:
  type: splunk
  endpoint: {endpoint}
  auth:
    type: api_key
    api_key: sk-test
output:
{output}
"#
    )
}

#[tokio::test]
async fn test_splunk_run_writes_json_inventory() {
    let server = splunk_server().await;
    let dir = workdir();
    let config = write_config(
        dir.path(),
        "splunk.yml",
        &splunk_config(&server.uri(), "  format: json"),
    );

    logfiend_cmd(dir.path())
        .args([
            "--config",
            config.to_str().unwrap(),
            "--output",
            "output/splunk.json",
            "--verbose",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Connection validated successfully"))
        .stdout(predicate::str::contains(
            "splunk data source inventory saved to output/splunk.json (3 sources)",
        ))
        .stdout(predicate::str::contains("Summary by type:"))
        .stdout(predicate::str::contains("  splunk-index: 3"));

    let inventory = read_json(dir.path(), "output/splunk.json");
    assert_eq!(inventory["metadata"]["provider"], "splunk");
    assert_eq!(inventory["metadata"]["source_count"], 3);
    assert_eq!(inventory["data_sources"][0]["pattern"], "index=main");
    assert_eq!(inventory["data_sources"][1]["status"], "internal");
}

#[cfg(unix)]
#[tokio::test]
async fn test_output_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let server = splunk_server().await;
    let dir = workdir();
    let config = write_config(
        dir.path(),
        "splunk.yml",
        &splunk_config(&server.uri(), "  pretty: false"),
    );

    logfiend_cmd(dir.path())
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .success();

    let written = dir.path().join("datasource_inventory.json");
    let mode = std::fs::metadata(&written).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[tokio::test]
async fn test_timestamped_csv_output() {
    let server = splunk_server().await;
    let dir = workdir();
    let config = write_config(
        dir.path(),
        "splunk.yml",
        &splunk_config(&server.uri(), "  format: csv\n  timestamp: true"),
    );

    logfiend_cmd(dir.path())
        .args([
            "--config",
            config.to_str().unwrap(),
            "--output",
            "output/indexes.csv",
        ])
        .assert()
        .success();

    let files: Vec<String> = std::fs::read_dir(dir.path().join("output"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 1);
    let name = &files[0];
    assert!(name.starts_with("indexes_") && name.ends_with("Z.csv"), "{name}");
    assert_eq!(name.len(), "indexes_20240101T000000Z.csv".len());

    let csv = std::fs::read_to_string(dir.path().join("output").join(name)).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,title,type,pattern,description,created_at,updated_at,status,tags")
    );
    assert_eq!(
        lines.next(),
        Some("main,main,main,splunk-index,index=main,,2024-01-15T08:30:00Z,,active,external")
    );
    assert_eq!(lines.count(), 2);
}

#[tokio::test]
async fn test_qradar_scenario_status_and_tags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/system/about"))
        .and(header("Version", "15.0"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/config/event_sources/log_source_management/log_sources"))
        .and(header("SEC", "qr-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("qradar/log_sources.json")))
        .mount(&server)
        .await;

    let dir = workdir();
    let config = write_config(
        dir.path(),
        "qradar.yml",
        &format!(
            "provider:\n  type: QRadar\n  endpoint: {}\n  auth:\n    type: api_key\n    api_key: qr-key\n",
            server.uri()
        ),
    );

    logfiend_cmd(dir.path())
        .args(["--config", config.to_str().unwrap(), "--output", "qradar.json"])
        .assert()
        .success();

    let inventory = read_json(dir.path(), "qradar.json");
    let first = &inventory["data_sources"][0];
    assert_eq!(first["id"], "62");
    assert_eq!(first["status"], "disabled");
    assert_eq!(first["type"], "qradar-log-source");
    assert_eq!(
        first["tags"],
        serde_json::json!(["qradar", "internal", "auto-discovered"])
    );
}

#[tokio::test]
async fn test_rejected_health_check_exits_3_without_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let dir = workdir();
    let config = write_config(
        dir.path(),
        "splunk.yml",
        &splunk_config(&server.uri(), "  format: json"),
    );

    logfiend_cmd(dir.path())
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Connection validation failed"))
        .stderr(predicate::str::contains("sk-test").not());

    assert!(!dir.path().join("datasource_inventory.json").exists());
}

#[tokio::test]
async fn test_listing_failure_exits_4() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/data/indexes"))
        .respond_with(ResponseTemplate::new(500).set_body_string("indexer unavailable"))
        .mount(&server)
        .await;

    let dir = workdir();
    let config = write_config(
        dir.path(),
        "splunk.yml",
        &splunk_config(&server.uri(), "  format: json"),
    );

    logfiend_cmd(dir.path())
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Error retrieving data views from splunk"))
        .stderr(predicate::str::contains("indexer unavailable"));
}

#[tokio::test]
async fn test_shared_deadline_exits_3() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)))
        .mount(&server)
        .await;

    let dir = workdir();
    let config = write_config(
        dir.path(),
        "splunk.yml",
        &splunk_config(&server.uri(), "  format: json"),
    );

    logfiend_cmd(dir.path())
        .args(["--config", config.to_str().unwrap(), "--timeout", "500ms"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("timed out"));
}
