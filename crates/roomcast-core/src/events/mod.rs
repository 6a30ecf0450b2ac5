//! Room-change events consumed by the notification dispatcher.
//!
//! Events are produced by the trigger surface from document-change
//! notifications and handed to the trigger adapters, which project them
//! into a dispatch.

pub mod room;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use room::RoomChangeEvent;

/// Wrapper for a room-change event with delivery metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomEvent {
    /// Unique id of this delivery, used to correlate log lines.
    pub id: Uuid,
    /// When the event was received.
    pub received_at: DateTime<Utc>,
    /// The event payload.
    pub payload: RoomChangeEvent,
}

impl RoomEvent {
    /// Wrap a payload with a fresh delivery id.
    pub fn new(payload: RoomChangeEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            payload,
        }
    }
}
