//! Typed room subcollection change events.

use serde::{Deserialize, Serialize};

use crate::types::id::{ItemId, RoomId, UserId};

/// One change to a room's messages or tasks.
///
/// Each variant carries only the fields needed to build a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoomChangeEvent {
    /// A message was posted to the room.
    MessageCreated {
        /// The room.
        room_id: RoomId,
        /// The new message document.
        message_id: ItemId,
        /// Who sent it.
        sender_id: Option<UserId>,
        /// Sender display name at send time.
        sender_name: String,
        /// Room name copied onto the message by the client, if any.
        room_name: Option<String>,
        /// Message text.
        text: String,
    },
    /// A task was added to the room.
    TaskCreated {
        /// The room.
        room_id: RoomId,
        /// The new task document.
        task_id: ItemId,
        /// Who added it.
        created_by: Option<UserId>,
        /// Task text.
        text: String,
    },
    /// A task document changed.
    TaskUpdated {
        /// The room.
        room_id: RoomId,
        /// The task document.
        task_id: ItemId,
        /// Completion flag before the write, `None` if the field was absent.
        was_completed: Option<bool>,
        /// Completion flag after the write, `None` if the field was absent.
        is_completed: Option<bool>,
        /// Task text after the write.
        text: String,
    },
    /// A task was removed from the room.
    TaskDeleted {
        /// The room.
        room_id: RoomId,
        /// The deleted task document.
        task_id: ItemId,
        /// Task text at deletion time.
        text: String,
    },
}

impl RoomChangeEvent {
    /// The room the change happened in.
    pub fn room_id(&self) -> &RoomId {
        match self {
            Self::MessageCreated { room_id, .. }
            | Self::TaskCreated { room_id, .. }
            | Self::TaskUpdated { room_id, .. }
            | Self::TaskDeleted { room_id, .. } => room_id,
        }
    }

    /// Short machine name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MessageCreated { .. } => "message_created",
            Self::TaskCreated { .. } => "task_created",
            Self::TaskUpdated { .. } => "task_updated",
            Self::TaskDeleted { .. } => "task_deleted",
        }
    }
}
