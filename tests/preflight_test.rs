use httpmock::prelude::*;
use weather_loadtest::adapters::preflight::probe_health;
use weather_loadtest::LoadTestError;

#[tokio::test]
async fn test_preflight_reads_health_status() {
    let server = MockServer::start_async().await;
    let health = server
        .mock_async(|when, then| {
            when.method(GET).path("/health");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "status": "ok", "message": "API is running" }));
        })
        .await;

    let report = probe_health(&server.base_url()).await.unwrap();

    health.assert_async().await;
    assert_eq!(report.status, 200);
    assert_eq!(report.reported_status.as_deref(), Some("ok"));
}

#[tokio::test]
async fn test_preflight_accepts_non_json_body() {
    let server = MockServer::start_async().await;
    let _health = server
        .mock_async(|when, then| {
            when.method(GET).path("/health");
            then.status(204);
        })
        .await;

    let report = probe_health(&server.base_url()).await.unwrap();

    assert_eq!(report.status, 204);
    assert!(report.reported_status.is_none());
}

#[tokio::test]
async fn test_preflight_rejects_unhealthy_target() {
    let server = MockServer::start_async().await;
    let _health = server
        .mock_async(|when, then| {
            when.method(GET).path("/health");
            then.status(503);
        })
        .await;

    let error = probe_health(&server.base_url()).await.unwrap_err();

    assert!(matches!(error, LoadTestError::TargetUnavailable { .. }));
    assert!(error.to_string().contains("503"));
    assert_eq!(error.exit_code(), 2);
}

#[tokio::test]
async fn test_preflight_rejects_invalid_host() {
    let error = probe_health("not a url").await.unwrap_err();
    assert!(matches!(error, LoadTestError::InvalidConfigValueError { .. }));
}
