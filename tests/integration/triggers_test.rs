//! Integration tests for the document-change trigger endpoints.

use std::collections::HashSet;

use axum::http::StatusCode;
use serde_json::json;

use roomcast_firebase::RecordingPushService;

use crate::helpers::{TestApp, message_fields, task_fields};

fn tokens_of(sent: &roomcast_core::traits::push::MulticastMessage) -> HashSet<&str> {
    sent.tokens.iter().map(String::as_str).collect()
}

#[tokio::test]
async fn test_message_created_notifies_other_members_with_tokens() {
    let app = TestApp::new();

    let response = app
        .trigger(
            "/triggers/messages/created",
            json!({
                "document": "rooms/R1/messages/m1",
                "value": {"fields": message_fields("A", "Ann", "R1", "hello")},
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["kind"], "message_created");
    assert_eq!(response.body["data"]["document"], "rooms/R1/messages/m1");
    assert_eq!(response.body["data"]["dispatched"], true);
    assert_eq!(response.outcome_status(), Some("delivered"));
    assert_eq!(response.body["data"]["outcome"]["recipients"], 2);

    let sent = app.push.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].tokens, vec!["tB"]);
    assert_eq!(sent[0].notification.title, "New message in R1");
    assert_eq!(sent[0].notification.body, "Ann: hello");
    assert_eq!(sent[0].webpush.fcm_options.link, "/room.html?id=R1");
}

#[tokio::test]
async fn test_message_created_accepts_full_resource_name() {
    let app = TestApp::new();

    let response = app
        .trigger(
            "/triggers/messages/created",
            json!({
                "value": {
                    "name": "projects/demo/databases/(default)/documents/rooms/R1/messages/m2",
                    "fields": message_fields("B", "Ben", "R1", "hi"),
                },
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.body["data"]["document"], "rooms/R1/messages/m2");

    let sent = app.push.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].tokens, vec!["tA"]);
}

#[tokio::test]
async fn test_task_created_excludes_creator() {
    let app = TestApp::new();

    let response = app
        .trigger(
            "/triggers/tasks/created",
            json!({
                "document": "rooms/R2/tasks/t1",
                "value": {"fields": task_fields("Mop the floor", false, "B")},
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.outcome_status(), Some("delivered"));

    let sent = app.push.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].tokens, vec!["tA"]);
    assert_eq!(sent[0].notification.title, "New Task Added");
    assert_eq!(
        sent[0].notification.body,
        "A new task was added: \"Mop the floor\""
    );
}

#[tokio::test]
async fn test_task_completion_notifies_every_member() {
    let app = TestApp::new();

    let response = app
        .trigger(
            "/triggers/tasks/updated",
            json!({
                "document": "rooms/R2/tasks/t1",
                "oldValue": {"fields": task_fields("Mop", false, "B")},
                "value": {"fields": task_fields("Mop", true, "B")},
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.outcome_status(), Some("delivered"));

    let sent = app.push.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(tokens_of(&sent[0]), HashSet::from(["tA", "tB"]));
    assert_eq!(sent[0].notification.title, "Task Completed!");
    assert_eq!(
        sent[0].notification.body,
        "The task \"Mop\" was marked as complete."
    );
}

#[tokio::test]
async fn test_task_update_without_completion_is_ignored() {
    let app = TestApp::new();

    for (before, after) in [(true, true), (true, false), (false, false)] {
        let response = app
            .trigger(
                "/triggers/tasks/updated",
                json!({
                    "document": "rooms/R2/tasks/t1",
                    "oldValue": {"fields": task_fields("Mop", before, "B")},
                    "value": {"fields": task_fields("Mop", after, "B")},
                }),
            )
            .await;

        assert_eq!(response.status, StatusCode::ACCEPTED);
        assert_eq!(response.body["data"]["dispatched"], false);
        assert!(response.body["data"].get("outcome").is_none());
    }

    assert_eq!(app.push.call_count().await, 0);
}

#[tokio::test]
async fn test_task_deleted_uses_old_value() {
    let app = TestApp::new();

    let response = app
        .trigger(
            "/triggers/tasks/deleted",
            json!({
                "document": "rooms/R2/tasks/t1",
                "oldValue": {"fields": task_fields("Mop", true, "B")},
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::ACCEPTED);

    let sent = app.push.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(tokens_of(&sent[0]), HashSet::from(["tA", "tB"]));
    assert_eq!(sent[0].notification.title, "Task Deleted");
    assert_eq!(sent[0].notification.body, "The task \"Mop\" was deleted.");
}

#[tokio::test]
async fn test_missing_room_is_accepted_without_push() {
    let app = TestApp::new();
    assert!(app.store.remove("rooms", "R1"));

    let response = app
        .trigger(
            "/triggers/messages/created",
            json!({
                "document": "rooms/R1/messages/m1",
                "value": {"fields": message_fields("A", "Ann", "R1", "hello")},
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.outcome_status(), Some("room_not_found"));
    assert_eq!(app.push.call_count().await, 0);
}

#[tokio::test]
async fn test_push_failure_still_accepted() {
    let app = TestApp::with_push(RecordingPushService::new().failing("quota exceeded"));

    let response = app
        .trigger(
            "/triggers/tasks/created",
            json!({
                "document": "rooms/R2/tasks/t1",
                "value": {"fields": task_fields("Mop", false, "B")},
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.outcome_status(), Some("delivery_failed"));
    assert_eq!(app.push.call_count().await, 1);
}

#[tokio::test]
async fn test_duplicate_delivery_sends_twice() {
    let app = TestApp::new();
    let body = json!({
        "document": "rooms/R1/messages/m1",
        "value": {"fields": message_fields("A", "Ann", "R1", "hello")},
    });

    let first = app.trigger("/triggers/messages/created", body.clone()).await;
    let second = app.trigger("/triggers/messages/created", body).await;

    assert_eq!(first.status, StatusCode::ACCEPTED);
    assert_eq!(second.status, StatusCode::ACCEPTED);
    assert_ne!(first.body["data"]["event_id"], second.body["data"]["event_id"]);

    let sent = app.push.sent().await;
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], sent[1]);
}

#[tokio::test]
async fn test_wrong_subcollection_is_rejected() {
    let app = TestApp::new();

    let response = app
        .trigger(
            "/triggers/tasks/created",
            json!({
                "document": "rooms/R1/messages/m1",
                "value": {"fields": task_fields("Mop", false, "B")},
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(app.push.call_count().await, 0);
}

#[tokio::test]
async fn test_malformed_events_are_rejected() {
    let app = TestApp::new();

    let no_document = app
        .trigger(
            "/triggers/messages/created",
            json!({"value": {"fields": message_fields("A", "Ann", "R1", "hello")}}),
        )
        .await;
    assert_eq!(no_document.status, StatusCode::BAD_REQUEST);

    let bad_path = app
        .trigger(
            "/triggers/messages/created",
            json!({
                "document": "rooms/R1/messages",
                "value": {"fields": message_fields("A", "Ann", "R1", "hello")},
            }),
        )
        .await;
    assert_eq!(bad_path.status, StatusCode::BAD_REQUEST);

    let missing_before = app
        .trigger(
            "/triggers/tasks/updated",
            json!({
                "document": "rooms/R2/tasks/t1",
                "value": {"fields": task_fields("Mop", true, "B")},
            }),
        )
        .await;
    assert_eq!(missing_before.status, StatusCode::BAD_REQUEST);

    let not_json = app
        .request(
            "POST",
            "/triggers/tasks/created",
            Some("{not json".to_string()),
            &[],
        )
        .await;
    assert_eq!(not_json.status, StatusCode::BAD_REQUEST);
    assert_eq!(not_json.body["error"], "VALIDATION_ERROR");

    assert_eq!(app.push.call_count().await, 0);
}
