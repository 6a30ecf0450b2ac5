//! Chat message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roomcast_core::types::id::UserId;

/// A chat message in `rooms/{roomId}/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message text.
    #[serde(default)]
    pub text: String,
    /// Sender uid.
    #[serde(default)]
    pub sender_id: Option<UserId>,
    /// Sender display name at send time.
    #[serde(default)]
    pub sender_name: String,
    /// Room name copied by the client for notification titles.
    #[serde(default)]
    pub room_name: Option<String>,
    /// Server timestamp.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}
