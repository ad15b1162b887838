mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_reports_store_status() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert!(body["version"].is_string());
}
