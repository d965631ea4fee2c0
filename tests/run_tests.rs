//! End-to-end tests of command dispatch against a mock IBM Cloud

use std::collections::HashMap;

use clap::Parser;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ibmctl::{run, Cli, CloudError};

/// Lookup over a fixed set of variables
fn env(vars: &[(&str, String)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

fn mock_env(server: &MockServer) -> Vec<(&'static str, String)> {
    vec![
        ("IBMCLOUD_API_KEY", "test-key".to_string()),
        ("IBMCLOUD_IAM_URL", server.uri()),
        ("IBMCLOUD_SERVICE_URL", server.uri()),
    ]
}

async fn mount_token(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "e2e-token",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["ibmctl", "--batch"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

#[tokio::test]
async fn test_missing_api_key_makes_no_requests() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, 0).await;

    let vars = vec![
        ("IBMCLOUD_IAM_URL", mock_server.uri()),
        ("IBMCLOUD_SERVICE_URL", mock_server.uri()),
    ];
    let result = run(&cli(&["get", "service-id"]), env(&vars)).await;
    match result {
        Err(CloudError::Config(msg)) => assert!(msg.contains("IBMCLOUD_API_KEY")),
        other => panic!("Expected CloudError::Config, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_region_makes_no_requests() {
    let vars = vec![("IBMCLOUD_API_KEY", "test-key".to_string())];
    let result = run(&cli(&["get", "vpc"]), env(&vars)).await;
    assert!(matches!(result, Err(CloudError::Config(_))));
}

#[tokio::test]
async fn test_get_job_resolves_project_then_lists() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "projects": [{"id": "p-7", "name": "demo"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/p-7/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [{"id": "j-1", "name": "nightly", "image_reference": "icr.io/x/y"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut vars = mock_env(&mock_server);
    vars.push(("CODE_ENGINE_REGION", "us-south".to_string()));
    run(&cli(&["get", "job", "--project", "demo"]), env(&vars))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_job_unknown_project_is_not_found() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"projects": []})))
        .mount(&mock_server)
        .await;

    let vars = mock_env(&mock_server);
    let result = run(
        &cli(&["get", "secret", "--project", "nope", "--region", "eu-de"]),
        env(&vars),
    )
    .await;
    match result {
        Err(CloudError::NotFound(msg)) => {
            assert_eq!(msg, "No project found with the name 'nope'")
        }
        other => panic!("Expected CloudError::NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_service_ids_with_authn_filter() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/v1/apikeys/details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"account_id": "acc-9"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/serviceids"))
        .and(query_param("account_id", "acc-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "serviceids": [
                {"id": "ServiceId-idle", "name": "idle"},
                {"id": "ServiceId-busy", "name": "busy"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/serviceids/ServiceId-idle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ServiceId-idle",
            "name": "idle"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/serviceids/ServiceId-busy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ServiceId-busy",
            "name": "busy",
            "activity": {"authn_count": 40}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let vars = mock_env(&mock_server);
    run(&cli(&["get", "service-id", "--authn", "0"]), env(&vars))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_service_id_in_batch_mode_skips_prompt() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/v1/serviceids/ServiceId-old"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ServiceId-old",
            "name": "old"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/serviceids/ServiceId-old"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let vars = mock_env(&mock_server);
    run(&cli(&["delete", "service-id", "ServiceId-old"]), env(&vars))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_pagination_loop_is_reported() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, 1).await;

    // Every page points back at the same marker
    Mock::given(method("GET"))
        .and(path("/vpcs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "vpcs": [{"id": "v1", "name": "loop"}],
            "next": {"href": format!("{}/vpcs?start=same", mock_server.uri())}
        })))
        .mount(&mock_server)
        .await;

    let vars = mock_env(&mock_server);
    let result = run(&cli(&["get", "vpc", "--region", "us-south"]), env(&vars)).await;
    assert!(matches!(result, Err(CloudError::Pagination(_))));
}

#[tokio::test]
async fn test_expired_token_during_listing_is_authorization_error() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{"code": "not_authorized", "message": "token expired"}]
        })))
        .mount(&mock_server)
        .await;

    let vars = mock_env(&mock_server);
    let result = run(&cli(&["get", "project", "--region", "us-south"]), env(&vars)).await;
    assert!(matches!(
        result,
        Err(CloudError::Authorization { status: 401, .. })
    ));
}
