//! Integration tests for the health endpoint.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_names_providers() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["store"], "memory");
    assert_eq!(response.body["data"]["push"], "recording");
    assert!(response.body["data"]["version"].is_string());
}
