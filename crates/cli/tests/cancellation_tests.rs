//! Integration tests for Ctrl+C/SIGINT handling.
//!
//! Unix-only because they send SIGINT to the child process.
//! We assert:
//! - exit code is 130
//! - stderr contains the cancellation message
//! - no inventory is written

#![cfg(unix)]

mod common;

use std::process::Stdio;
use std::time::Duration;

use common::{workdir, write_config};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn logfiend_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("logfiend")
}

fn send_sigint(pid: u32) {
    // SAFETY: standard Unix kill syscall
    unsafe {
        libc::kill(pid as i32, libc::SIGINT);
    }
}

#[tokio::test]
async fn test_ctrl_c_during_health_check_exits_130() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(60)))
        .mount(&server)
        .await;

    let dir = workdir();
    let config = write_config(
        dir.path(),
        "splunk.yml",
        &format!("provider:\n  type: splunk\n  endpoint: {}\n", server.uri()),
    );

    let child = tokio::process::Command::new(logfiend_bin())
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["--config", config.to_str().unwrap(), "--timeout", "120"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn logfiend");

    let mut seen = false;
    for _ in 0..100 {
        if server
            .received_requests()
            .await
            .is_some_and(|requests| !requests.is_empty())
        {
            seen = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    assert!(seen, "health check request never arrived");

    send_sigint(child.id().expect("child has no pid"));

    let output = tokio::time::timeout(Duration::from_secs(10), child.wait_with_output())
        .await
        .expect("logfiend did not exit after SIGINT")
        .expect("failed to collect output");

    assert_eq!(output.status.code(), Some(130));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Operation cancelled by user"), "{stderr}");
    assert!(!dir.path().join("datasource_inventory.json").exists());
}
