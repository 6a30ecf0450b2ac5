//! Human-readable notification content.

use serde::{Deserialize, Serialize};

use roomcast_core::types::id::RoomId;

/// What a notification says and where tapping it leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// Title line.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Deep link opened on click.
    pub link: String,
}

impl NotificationPayload {
    /// Payload linking to `room_id`.
    pub fn for_room(room_id: &RoomId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            link: room_link(room_id),
        }
    }
}

/// Client route of a room page.
pub fn room_link(room_id: &RoomId) -> String {
    format!("/room.html?id={room_id}")
}
