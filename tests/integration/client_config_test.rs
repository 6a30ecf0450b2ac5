//! Integration tests for the public web-client configuration endpoint.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_client_config_camel_case_and_cached() {
    let app = TestApp::new();

    let response = app.request("GET", "/client-config", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["apiKey"], "test-api-key");
    assert_eq!(response.body["authDomain"], "roomcast-test.firebaseapp.com");
    assert_eq!(response.body["projectId"], "roomcast-test");
    assert_eq!(response.body["storageBucket"], "");
    assert_eq!(response.body["messagingSenderId"], "1234");
    assert_eq!(response.body["appId"], "1:1234:web:abcd");
    assert_eq!(
        response.headers.get("cache-control").unwrap(),
        "public, max-age=300"
    );
}

#[tokio::test]
async fn test_client_config_allows_any_origin() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            "/client-config",
            None,
            &[("Origin", "https://rooms.example.com")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_client_config_options_no_content() {
    let app = TestApp::new();

    let response = app
        .request(
            "OPTIONS",
            "/client-config",
            None,
            &[
                ("Origin", "https://rooms.example.com"),
                ("Access-Control-Request-Method", "GET"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(
        response.headers.get("access-control-allow-origin").unwrap(),
        "*"
    );
    assert_eq!(
        response.headers.get("access-control-allow-methods").unwrap(),
        "GET, OPTIONS"
    );
}

#[tokio::test]
async fn test_trigger_preflight_uses_configured_cors() {
    let app = TestApp::new();

    let response = app
        .request(
            "OPTIONS",
            "/triggers/messages/created",
            None,
            &[
                ("Origin", "https://rooms.example.com"),
                ("Access-Control-Request-Method", "POST"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get("access-control-allow-origin").unwrap(),
        "*"
    );
}
