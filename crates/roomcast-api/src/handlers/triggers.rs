//! Document-change trigger handlers.
//!
//! A malformed event is rejected with 400 because no retry can fix it.
//! Everything after that returns 202 whatever the dispatch outcome, so the
//! event source never retries a change because of a notification failure.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use tracing::info;

use roomcast_core::events::{RoomChangeEvent, RoomEvent};
use roomcast_core::types::path::{DocumentPath, Subcollection};
use roomcast_entity::{Message, Task};
use roomcast_notify::triggers;

use crate::dto::request::DocumentEventRequest;
use crate::dto::response::{ApiResponse, TriggerResponse};
use crate::error::ApiError;
use crate::state::AppState;

type TriggerResult = Result<(StatusCode, Json<ApiResponse<TriggerResponse>>), ApiError>;

/// POST /triggers/messages/created
pub async fn message_created(
    State(state): State<AppState>,
    body: Result<Json<DocumentEventRequest>, JsonRejection>,
) -> TriggerResult {
    let Json(req) = body?;
    let path = req.path(Subcollection::Messages)?;
    let message: Message = req.new_value(&path)?;
    let change = triggers::message_created(&path, &message);
    handle(&state, path, change).await
}

/// POST /triggers/tasks/created
pub async fn task_created(
    State(state): State<AppState>,
    body: Result<Json<DocumentEventRequest>, JsonRejection>,
) -> TriggerResult {
    let Json(req) = body?;
    let path = req.path(Subcollection::Tasks)?;
    let task: Task = req.new_value(&path)?;
    let change = triggers::task_created(&path, &task);
    handle(&state, path, change).await
}

/// POST /triggers/tasks/updated
pub async fn task_updated(
    State(state): State<AppState>,
    body: Result<Json<DocumentEventRequest>, JsonRejection>,
) -> TriggerResult {
    let Json(req) = body?;
    let path = req.path(Subcollection::Tasks)?;
    let before: Task = req.old_value(&path)?;
    let after: Task = req.new_value(&path)?;
    let change = triggers::task_updated(&path, &before, &after);
    handle(&state, path, change).await
}

/// POST /triggers/tasks/deleted
pub async fn task_deleted(
    State(state): State<AppState>,
    body: Result<Json<DocumentEventRequest>, JsonRejection>,
) -> TriggerResult {
    let Json(req) = body?;
    let path = req.path(Subcollection::Tasks)?;
    let task: Task = req.deleted_value(&path)?;
    let change = triggers::task_deleted(&path, &task);
    handle(&state, path, change).await
}

async fn handle(
    state: &AppState,
    path: DocumentPath,
    change: RoomChangeEvent,
) -> TriggerResult {
    let event = RoomEvent::new(change);
    info!(
        event_id = %event.id,
        kind = event.payload.kind(),
        document = %path,
        "Room change received"
    );

    let outcome = state.triggers.handle(&event).await;

    Ok((
        StatusCode::ACCEPTED,
        Json(ApiResponse::ok(TriggerResponse {
            event_id: event.id,
            kind: event.payload.kind().to_string(),
            document: path.to_string(),
            dispatched: outcome.is_some(),
            outcome,
        })),
    ))
}
