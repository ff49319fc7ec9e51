//! Microsoft Sentinel integration tests.
//!
//! # Invariants
//! - Requests target the workspace path at `api-version=2022-10-01`
//! - A bearer header is sent whenever a token is configured

mod common;

use common::*;
use secrecy::SecretString;
use wiremock::matchers::{header, method, path, query_param};

const WORKSPACE_PATH: &str = "/subscriptions/sub-1234/resourceGroups/rg-security/providers/Microsoft.OperationalInsights/workspaces/ws-prod";

fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), WORKSPACE_PATH)
}

#[tokio::test]
async fn test_list_tables() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{WORKSPACE_PATH}/tables")))
        .and(query_param("api-version", "2022-10-01"))
        .and(header("Authorization", "Bearer azure-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("sentinel/tables.json")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider(
        "sentinel",
        &endpoint(&server),
        Some(AuthConfig::bearer("azure-token")),
    );
    let sources = provider.fetch_data_views().await.unwrap();

    assert_eq!(provider.name(), "azure-sentinel");
    assert_eq!(sources.len(), 2);

    let security = &sources[0];
    assert_eq!(security.name, "SecurityEvent");
    assert_eq!(security.title, "Security Event");
    assert_eq!(security.source_type, "log-analytics-table");
    assert_eq!(security.tags, vec!["azure", "sentinel", "analytics"]);
    assert_eq!(security.metadata["workspace"], "ws-prod");
    assert_eq!(security.metadata["retentionDays"], 90);
    assert_eq!(security.metadata["columnCount"], 2);
    assert_eq!(security.metadata["columns"][0]["name"], "TimeGenerated");

    let custom = &sources[1];
    assert_eq!(custom.tags, vec!["azure", "sentinel", "custom"]);
    assert!(custom.metadata.get("columns").is_none());
    assert!(custom.description.is_empty());
}

#[tokio::test]
async fn test_token_sent_even_when_declared_type_differs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WORKSPACE_PATH))
        .and(query_param("api-version", "2022-10-01"))
        .and(header("Authorization", "Bearer fallback-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut auth = AuthConfig::api_key("unused");
    auth.token = Some(SecretString::new("fallback-token".to_string().into()));

    let provider = provider("sentinel", &endpoint(&server), Some(auth));
    provider.validate_connection().await.unwrap();
}

#[tokio::test]
async fn test_short_endpoint_path_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let short = format!("{}/subscriptions/sub-1234", server.uri());
    let provider = provider("sentinel", &short, Some(AuthConfig::bearer("t")));

    let err = provider.fetch_data_views().await.unwrap_err();
    assert!(matches!(err, ClientError::Fetch { .. }));

    let err = provider.validate_connection().await.unwrap_err();
    assert!(matches!(err, ClientError::Connection { .. }));
    assert!(provider.capabilities().requires_authentication);
}

#[tokio::test]
async fn test_null_table_fields_do_not_fail_the_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{WORKSPACE_PATH}/tables")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [
                {
                    "id": "t-syslog",
                    "properties": {
                        "retentionInDays": null,
                        "plan": null,
                        "schema": {"name": "Syslog", "displayName": null, "description": null}
                    }
                },
                {"id": "t-heartbeat", "properties": {"schema": {"name": "Heartbeat"}}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider("sentinel", &endpoint(&server), Some(AuthConfig::bearer("t")));
    let sources = provider.fetch_data_views().await.unwrap();

    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].name, "Syslog");
    assert!(sources[0].title.is_empty());
    assert_eq!(sources[0].metadata["retentionDays"], 0);
    assert_eq!(sources[1].name, "Heartbeat");
}
