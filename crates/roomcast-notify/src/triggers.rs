//! Trigger adapters: projections from room-change events to dispatches.

use tracing::debug;

use roomcast_core::events::{RoomChangeEvent, RoomEvent};
use roomcast_core::types::id::{RoomId, UserId};
use roomcast_core::types::path::DocumentPath;
use roomcast_entity::{Message, Task};

use crate::dispatcher::NotificationDispatcher;
use crate::formatter::NotificationFormatter;
use crate::outcome::DispatchOutcome;
use crate::payload::NotificationPayload;

/// Arguments of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    /// Room whose members are notified.
    pub room_id: RoomId,
    /// Member excluded from the recipients, if any.
    pub actor: Option<UserId>,
    /// Notification content.
    pub payload: NotificationPayload,
}

/// Whether a task write is the `incomplete → complete` transition.
///
/// Missing flags never count as either state.
pub fn is_completion(was_completed: Option<bool>, is_completed: Option<bool>) -> bool {
    was_completed == Some(false) && is_completed == Some(true)
}

/// Project an event onto the dispatch it calls for, if any.
pub fn project(event: &RoomChangeEvent) -> Option<DispatchRequest> {
    match event {
        RoomChangeEvent::MessageCreated {
            room_id,
            sender_id,
            sender_name,
            room_name,
            text,
            ..
        } => Some(DispatchRequest {
            room_id: room_id.clone(),
            actor: sender_id.clone(),
            payload: NotificationFormatter::message_created(
                room_id,
                room_name.as_deref(),
                sender_name,
                text,
            ),
        }),
        RoomChangeEvent::TaskCreated {
            room_id,
            created_by,
            text,
            ..
        } => Some(DispatchRequest {
            room_id: room_id.clone(),
            actor: created_by.clone(),
            payload: NotificationFormatter::task_created(room_id, text),
        }),
        RoomChangeEvent::TaskUpdated {
            room_id,
            was_completed,
            is_completed,
            text,
            ..
        } => is_completion(*was_completed, *is_completed).then(|| DispatchRequest {
            room_id: room_id.clone(),
            actor: None,
            payload: NotificationFormatter::task_completed(room_id, text),
        }),
        RoomChangeEvent::TaskDeleted { room_id, text, .. } => Some(DispatchRequest {
            room_id: room_id.clone(),
            actor: None,
            payload: NotificationFormatter::task_deleted(room_id, text),
        }),
    }
}

/// Event for a newly created message document.
pub fn message_created(path: &DocumentPath, message: &Message) -> RoomChangeEvent {
    RoomChangeEvent::MessageCreated {
        room_id: path.room_id.clone(),
        message_id: path.item_id.clone(),
        sender_id: message.sender_id.clone(),
        sender_name: message.sender_name.clone(),
        room_name: message.room_name.clone(),
        text: message.text.clone(),
    }
}

/// Event for a newly created task document.
pub fn task_created(path: &DocumentPath, task: &Task) -> RoomChangeEvent {
    RoomChangeEvent::TaskCreated {
        room_id: path.room_id.clone(),
        task_id: path.item_id.clone(),
        created_by: task.created_by.clone(),
        text: task.text.clone(),
    }
}

/// Event for a task document update.
pub fn task_updated(path: &DocumentPath, before: &Task, after: &Task) -> RoomChangeEvent {
    RoomChangeEvent::TaskUpdated {
        room_id: path.room_id.clone(),
        task_id: path.item_id.clone(),
        was_completed: before.completed,
        is_completed: after.completed,
        text: after.text.clone(),
    }
}

/// Event for a deleted task document.
pub fn task_deleted(path: &DocumentPath, task: &Task) -> RoomChangeEvent {
    RoomChangeEvent::TaskDeleted {
        room_id: path.room_id.clone(),
        task_id: path.item_id.clone(),
        text: task.text.clone(),
    }
}

/// Runs the adapters against a dispatcher.
#[derive(Debug, Clone)]
pub struct TriggerHandler {
    dispatcher: NotificationDispatcher,
}

impl TriggerHandler {
    /// Create a handler over `dispatcher`.
    pub fn new(dispatcher: NotificationDispatcher) -> Self {
        Self { dispatcher }
    }

    /// The underlying dispatcher.
    pub fn dispatcher(&self) -> &NotificationDispatcher {
        &self.dispatcher
    }

    /// Handle one event. `None` when the event calls for no notification.
    pub async fn handle(&self, event: &RoomEvent) -> Option<DispatchOutcome> {
        let Some(request) = project(&event.payload) else {
            debug!(
                event_id = %event.id,
                kind = event.payload.kind(),
                room_id = %event.payload.room_id(),
                "Event ignored"
            );
            return None;
        };

        debug!(
            event_id = %event.id,
            kind = event.payload.kind(),
            "Projected room event"
        );
        Some(
            self.dispatcher
                .dispatch(&request.room_id, request.actor.as_ref(), &request.payload)
                .await,
        )
    }
}
