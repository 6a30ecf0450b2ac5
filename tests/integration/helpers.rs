//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use roomcast_api::AppState;
use roomcast_core::config::AppConfig;
use roomcast_firebase::{MemoryDocumentStore, RecordingPushService};
use roomcast_notify::{NotificationDispatcher, TriggerHandler};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Seeded in-memory document store
    pub store: Arc<MemoryDocumentStore>,
    /// Push service recording every multicast
    pub push: Arc<RecordingPushService>,
}

impl TestApp {
    /// Create a test application over the default seed
    pub fn new() -> Self {
        Self::with_push(RecordingPushService::new())
    }

    /// Create a test application with a configured push recorder
    pub fn with_push(push: RecordingPushService) -> Self {
        let mut config = AppConfig::default();
        config.client.api_key = "test-api-key".to_string();
        config.client.auth_domain = "roomcast-test.firebaseapp.com".to_string();
        config.client.project_id = "roomcast-test".to_string();
        config.client.messaging_sender_id = "1234".to_string();
        config.client.app_id = "1:1234:web:abcd".to_string();

        let store = Arc::new(
            MemoryDocumentStore::from_seed(seed()).expect("Failed to seed document store"),
        );
        let push = Arc::new(push);

        let dispatcher = NotificationDispatcher::new(store.clone(), push.clone());
        let state = AppState::new(Arc::new(config), TriggerHandler::new(dispatcher));
        let router = roomcast_api::build_router(state);

        Self {
            router,
            store,
            push,
        }
    }

    /// POST a JSON event to a trigger endpoint
    pub async fn trigger(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body.to_string()), &[]).await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if body.is_some() {
            req = req.header("Content-Type", "application/json");
        }
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(body.map(Body::from).unwrap_or_else(Body::empty))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `status` field of the reported dispatch outcome
    pub fn outcome_status(&self) -> Option<&str> {
        self.body["data"]["outcome"]["status"].as_str()
    }
}

/// Rooms R1 `[A, B, C]` and R2 `[A, B]`; A and B have tokens, C has none.
pub fn seed() -> Value {
    json!({
        "rooms": {
            "R1": {"name": "R1", "members": ["A", "B", "C"], "code": "ABC123", "createdBy": "A"},
            "R2": {"name": "Chores", "members": ["A", "B"], "code": "XYZ789", "createdBy": "B"},
        },
        "users": {
            "A": {"name": "Ann", "fcmToken": "tA", "rooms": ["R1", "R2"]},
            "B": {"name": "Ben", "fcmToken": "tB", "rooms": ["R1", "R2"]},
            "C": {"name": "Cal", "rooms": ["R1"]},
        },
    })
}

/// Typed-value encoding of a string field
pub fn string_value(value: &str) -> Value {
    json!({"stringValue": value})
}

/// Typed-value encoding of a boolean field
pub fn bool_value(value: bool) -> Value {
    json!({"booleanValue": value})
}

/// Message snapshot fields in typed-value encoding
pub fn message_fields(sender_id: &str, sender_name: &str, room_name: &str, text: &str) -> Value {
    json!({
        "senderId": string_value(sender_id),
        "senderName": string_value(sender_name),
        "roomName": string_value(room_name),
        "text": string_value(text),
        "timestamp": {"timestampValue": "2024-05-01T10:00:00Z"},
    })
}

/// Task snapshot fields in typed-value encoding
pub fn task_fields(text: &str, completed: bool, created_by: &str) -> Value {
    json!({
        "text": string_value(text),
        "completed": bool_value(completed),
        "createdBy": string_value(created_by),
    })
}
