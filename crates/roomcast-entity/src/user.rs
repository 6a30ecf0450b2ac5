//! User entity model.

use serde::{Deserialize, Serialize};

use roomcast_core::types::id::{RoomId, UserId};

/// A signed-in person and their push registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Document id (the auth provider's uid).
    pub id: UserId,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Latest push registration token. Re-registration overwrites it.
    #[serde(default)]
    pub fcm_token: Option<String>,
    /// Rooms the user has joined.
    #[serde(default)]
    pub rooms: Vec<RoomId>,
}

impl User {
    /// The push token, if the user can be reached at all.
    pub fn push_token(&self) -> Option<&str> {
        self.fcm_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
