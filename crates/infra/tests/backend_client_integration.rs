//! Integration tests for the backend client against a mock HTTP server
//!
//! **Coverage:**
//! - SQL envelope decoding and request body shape
//! - Backend-reported failures surface as `Backend` errors
//! - Configured headers reach the server
//! - Health probe
//! - End-to-end: SQL source → analysis service → report

use std::sync::Arc;
use std::time::Duration;

use dashlens_core::{AnalysisService, SqlMetricSource};
use dashlens_domain::{Config, DashLensError, IssueTag};
use dashlens_infra::{BackendClient, HttpClient};
use serde_json::{json, Map};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config { api_url: server.uri(), timeout_secs: 5, ..Config::default() }
}

fn fast_client(config: &Config) -> BackendClient {
    let http = HttpClient::from_config(config)
        .expect("http client")
        .with_retry_delay(Duration::from_millis(5));
    BackendClient::with_http(config, http).expect("backend client")
}

#[tokio::test]
async fn execute_sql_posts_query_and_decodes_rows() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sql/execute"))
        .and(body_json(json!({"query": "SELECT name, value FROM kpi"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "result": [{"name": "Revenue", "value": 10}],
            "row_count": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client(&config_for(&server));
    let rows = client.execute_sql("SELECT name, value FROM kpi", &Map::new()).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Revenue");
}

#[tokio::test]
async fn backend_failure_is_reported_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "only SELECT queries are allowed"
        })))
        .mount(&server)
        .await;

    let client = fast_client(&config_for(&server));
    let err = client.execute_sql("DELETE FROM kpi", &Map::new()).await.unwrap_err();

    assert_eq!(err, DashLensError::Backend("only SELECT queries are allowed".into()));
}

#[tokio::test]
async fn retries_server_errors_then_gives_up() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .expect(3)
        .mount(&server)
        .await;

    let client = fast_client(&config_for(&server));
    let err = client.execute_sql("SELECT 1", &Map::new()).await.unwrap_err();

    assert!(matches!(err, DashLensError::Network(msg) if msg.contains("502")));
}

#[tokio::test]
async fn malformed_envelope_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = fast_client(&config_for(&server));
    let err = client.execute_sql("SELECT 1", &Map::new()).await.unwrap_err();

    assert!(matches!(err, DashLensError::Parse(_)));
}

#[tokio::test]
async fn configured_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.request_headers.insert("Authorization".into(), "Bearer secret".into());
    let client = BackendClient::new(&config).unwrap();

    let status = client.health().await.unwrap();
    assert!(status.is_ok());
}

#[tokio::test]
async fn unhealthy_backend_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "degraded"})))
        .mount(&server)
        .await;

    let client = fast_client(&config_for(&server));
    assert!(matches!(client.health().await, Err(DashLensError::Backend(_))));
}

#[tokio::test]
async fn sql_source_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sql/execute"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "result": [
                {"name": "Выручка", "current_value": "85 000,00", "previous_value": 100000,
                 "critical_min": 80000, "warning_min": 90000},
                {"name": "Defects", "current_value": 4, "previous_value": 5,
                 "positive_direction": "down"}
            ],
            "row_count": 2
        })))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = Arc::new(fast_client(&config));
    let source = SqlMetricSource::new(client, "SELECT * FROM kpi");
    let analyses = AnalysisService::new(Arc::new(source), config).run().await.unwrap();

    assert_eq!(analyses.len(), 2);
    let revenue = &analyses[0].report;
    assert!(revenue.has_tag(IssueTag::Warning));
    assert!(revenue.has_tag(IssueTag::NegativeChange));
    assert!(!revenue.has_tag(IssueTag::Critical));
    assert!(analyses[1].report.is_clean());
}
