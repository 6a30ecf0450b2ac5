//! Room entity model.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use roomcast_core::types::id::{RoomId, UserId};

/// A shared workspace with members, tasks, and messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Document id.
    pub id: RoomId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Member uids. A set semantically, stored as a list.
    #[serde(default)]
    pub members: Vec<UserId>,
    /// Join code shared out of band.
    #[serde(default)]
    pub code: String,
    /// Who created the room.
    #[serde(default)]
    pub created_by: Option<UserId>,
}

impl Room {
    /// Members to notify for a change made by `actor`.
    ///
    /// Removes `actor` when given and collapses duplicate member ids,
    /// keeping the first occurrence.
    pub fn recipients(&self, actor: Option<&UserId>) -> Vec<UserId> {
        let mut seen = HashSet::with_capacity(self.members.len());
        self.members
            .iter()
            .filter(|member| Some(*member) != actor)
            .filter(|member| seen.insert(*member))
            .cloned()
            .collect()
    }
}
