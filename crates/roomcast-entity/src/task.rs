//! Task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roomcast_core::types::id::UserId;

/// A to-do item in `rooms/{roomId}/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task text.
    #[serde(default)]
    pub text: String,
    /// Completion flag. `None` when the field is missing.
    #[serde(default)]
    pub completed: Option<bool>,
    /// Creator uid.
    #[serde(default)]
    pub created_by: Option<UserId>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
