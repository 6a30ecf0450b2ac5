//! Typed reads of room and user documents.

use tracing::warn;

use roomcast_core::result::AppResult;
use roomcast_core::traits::store::DocumentStore;
use roomcast_core::types::id::{RoomId, UserId};
use roomcast_entity::{ROOMS_COLLECTION, Room, USERS_COLLECTION, User};

/// Fetch a room. `Ok(None)` when it does not exist.
pub async fn fetch_room(store: &dyn DocumentStore, room_id: &RoomId) -> AppResult<Option<Room>> {
    match store.get(ROOMS_COLLECTION, room_id.as_str()).await? {
        Some(doc) => doc.decode().map(Some),
        None => Ok(None),
    }
}

/// Fetch a user.
///
/// A member id that cannot name a document (empty, or containing `/`) and
/// a user document that cannot be decoded are both treated like a missing
/// user.
pub async fn fetch_user(store: &dyn DocumentStore, user_id: &UserId) -> AppResult<Option<User>> {
    if let Err(e) = UserId::parse(user_id.as_str()) {
        warn!(user_id = %user_id, error = %e, "Skipping malformed member id");
        return Ok(None);
    }

    let Some(doc) = store.get(USERS_COLLECTION, user_id.as_str()).await? else {
        return Ok(None);
    };
    match doc.decode::<User>() {
        Ok(user) => Ok(Some(user)),
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "Skipping undecodable user document");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use roomcast_core::error::AppError;
    use roomcast_core::traits::store::Document;
    use serde_json::{Map, Value};

    use super::*;

    /// Store that serves only `users/A` and fails every other read.
    #[derive(Debug)]
    struct OnlyAStore;

    #[async_trait]
    impl DocumentStore for OnlyAStore {
        fn provider_type(&self) -> &str {
            "only-a"
        }

        async fn get(&self, collection: &str, id: &str) -> AppResult<Option<Document>> {
            if collection == USERS_COLLECTION && id == "A" {
                let mut fields = Map::new();
                fields.insert("fcmToken".into(), Value::String("tA".into()));
                return Ok(Some(Document::new("A", fields)));
            }
            Err(AppError::external_service(format!(
                "unexpected read of '{collection}/{id}'"
            )))
        }
    }

    #[tokio::test]
    async fn test_malformed_member_ids_are_absent_without_reads() {
        assert!(fetch_user(&OnlyAStore, &UserId::new("")).await.unwrap().is_none());
        assert!(
            fetch_user(&OnlyAStore, &UserId::new("a/b"))
                .await
                .unwrap()
                .is_none()
        );

        let user = fetch_user(&OnlyAStore, &UserId::new("A")).await.unwrap();
        assert_eq!(user.and_then(|u| u.fcm_token), Some("tA".to_string()));
    }

    #[tokio::test]
    async fn test_store_errors_still_propagate() {
        assert!(fetch_user(&OnlyAStore, &UserId::new("B")).await.is_err());
    }
}
