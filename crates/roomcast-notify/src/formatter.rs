//! Notification text for each kind of room change.

use roomcast_core::types::id::RoomId;

use crate::payload::NotificationPayload;

/// Longest message excerpt placed in a notification body, in characters.
pub const MESSAGE_SNIPPET_CHARS: usize = 100;

/// Formats notification payloads for room changes.
pub struct NotificationFormatter;

impl NotificationFormatter {
    /// A new chat message.
    pub fn message_created(
        room_id: &RoomId,
        room_name: Option<&str>,
        sender_name: &str,
        text: &str,
    ) -> NotificationPayload {
        let room_name = room_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("your room");
        NotificationPayload::for_room(
            room_id,
            format!("New message in {room_name}"),
            format!("{sender_name}: {}", snippet(text, MESSAGE_SNIPPET_CHARS)),
        )
    }

    /// A new task.
    pub fn task_created(room_id: &RoomId, text: &str) -> NotificationPayload {
        NotificationPayload::for_room(
            room_id,
            "New Task Added",
            format!("A new task was added: \"{text}\""),
        )
    }

    /// A task marked complete.
    pub fn task_completed(room_id: &RoomId, text: &str) -> NotificationPayload {
        NotificationPayload::for_room(
            room_id,
            "Task Completed!",
            format!("The task \"{text}\" was marked as complete."),
        )
    }

    /// A task removed.
    pub fn task_deleted(room_id: &RoomId, text: &str) -> NotificationPayload {
        NotificationPayload::for_room(
            room_id,
            "Task Deleted",
            format!("The task \"{text}\" was deleted."),
        )
    }
}

/// First `max` characters of `text`, never splitting a code point.
fn snippet(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
