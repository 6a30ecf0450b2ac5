//! Room subcollection document paths.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::id::{ItemId, RoomId};

/// Subcollections of a room that produce change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subcollection {
    /// `rooms/{roomId}/messages`
    Messages,
    /// `rooms/{roomId}/tasks`
    Tasks,
}

impl Subcollection {
    /// The collection segment as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Messages => "messages",
            Self::Tasks => "tasks",
        }
    }
}

impl fmt::Display for Subcollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `rooms/{roomId}/{subcollection}/{itemId}` path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPath {
    /// The owning room.
    pub room_id: RoomId,
    /// Which subcollection the item lives in.
    pub subcollection: Subcollection,
    /// The item's document id.
    pub item_id: ItemId,
}

impl DocumentPath {
    /// Parse a document path or full resource name.
    ///
    /// Accepts `rooms/R/tasks/T`, a leading `/`, and the
    /// `projects/{p}/databases/{d}/documents/` resource-name prefix.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim().trim_matches('/');
        let relative = match trimmed.find("/documents/") {
            Some(idx) if trimmed.starts_with("projects/") => &trimmed[idx + "/documents/".len()..],
            _ => trimmed,
        };

        let segments: Vec<&str> = relative.split('/').collect();
        let [root, room, sub, item] = segments.as_slice() else {
            return Err(AppError::validation(format!(
                "Document path '{raw}' does not match rooms/{{roomId}}/{{subcollection}}/{{itemId}}"
            )));
        };

        if *root != "rooms" {
            return Err(AppError::validation(format!(
                "Document path '{raw}' is not under the rooms collection"
            )));
        }

        let subcollection = match *sub {
            "messages" => Subcollection::Messages,
            "tasks" => Subcollection::Tasks,
            other => {
                return Err(AppError::validation(format!(
                    "Unsupported subcollection '{other}' in '{raw}'"
                )));
            }
        };

        Ok(Self {
            room_id: RoomId::parse(room)?,
            subcollection,
            item_id: ItemId::parse(item)?,
        })
    }

    /// Fail unless the path points into `expected`.
    pub fn expect_subcollection(self, expected: Subcollection) -> Result<Self, AppError> {
        if self.subcollection != expected {
            return Err(AppError::validation(format!(
                "Expected a {expected} document, got {}",
                self
            )));
        }
        Ok(self)
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rooms/{}/{}/{}",
            self.room_id, self.subcollection, self.item_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relative_path() {
        let path = DocumentPath::parse("rooms/R1/messages/m1").unwrap();
        assert_eq!(path.room_id.as_str(), "R1");
        assert_eq!(path.subcollection, Subcollection::Messages);
        assert_eq!(path.item_id.as_str(), "m1");
    }

    #[test]
    fn test_parse_resource_name() {
        let path = DocumentPath::parse(
            "projects/demo/databases/(default)/documents/rooms/R2/tasks/t9",
        )
        .unwrap();
        assert_eq!(path.to_string(), "rooms/R2/tasks/t9");
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(DocumentPath::parse("users/u1").is_err());
        assert!(DocumentPath::parse("rooms/R1/polls/p1").is_err());
        assert!(DocumentPath::parse("rooms//tasks/t1").is_err());
        assert!(DocumentPath::parse("chats/R1/tasks/t1").is_err());
    }

    #[test]
    fn test_expect_subcollection() {
        let path = DocumentPath::parse("/rooms/R1/tasks/t1/").unwrap();
        assert!(path.clone().expect_subcollection(Subcollection::Tasks).is_ok());
        assert!(path.expect_subcollection(Subcollection::Messages).is_err());
    }
}
