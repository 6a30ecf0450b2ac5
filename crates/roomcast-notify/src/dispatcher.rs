//! Notification dispatcher: resolves room members to push tokens and
//! sends one multicast per room change.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, error, info, warn};

use roomcast_core::result::AppResult;
use roomcast_core::traits::push::{MulticastMessage, PushService};
use roomcast_core::traits::store::DocumentStore;
use roomcast_core::types::id::{RoomId, UserId};
use roomcast_entity::User;

use crate::lookup;
use crate::outcome::DispatchOutcome;
use crate::payload::NotificationPayload;

/// Relays room changes to the push tokens of room members.
///
/// Holds no per-invocation state; concurrent dispatches, including for the
/// same room, are independent.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    /// Room and user documents
    store: Arc<dyn DocumentStore>,
    /// Multicast delivery
    push: Arc<dyn PushService>,
}

impl NotificationDispatcher {
    /// Create a dispatcher over the given clients.
    pub fn new(store: Arc<dyn DocumentStore>, push: Arc<dyn PushService>) -> Self {
        Self { store, push }
    }

    /// The document store in use.
    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    /// The push service in use.
    pub fn push(&self) -> &dyn PushService {
        self.push.as_ref()
    }

    /// Notify every member of `room_id` except `actor`.
    ///
    /// Never fails: the outcome is logged and returned, and a store error
    /// becomes [`DispatchOutcome::Aborted`].
    pub async fn dispatch(
        &self,
        room_id: &RoomId,
        actor: Option<&UserId>,
        payload: &NotificationPayload,
    ) -> DispatchOutcome {
        info!(
            room_id = %room_id,
            actor = actor.map(UserId::as_str).unwrap_or("-"),
            title = %payload.title,
            "Dispatching room notification"
        );

        let outcome = match self.run(room_id, actor, payload).await {
            Ok(outcome) => outcome,
            Err(e) => DispatchOutcome::Aborted {
                reason: e.to_string(),
            },
        };

        let status = outcome.status();
        match &outcome {
            DispatchOutcome::RoomNotFound => {
                error!(room_id = %room_id, status, "Room document does not exist");
            }
            DispatchOutcome::NoRecipients => {
                info!(room_id = %room_id, status, "No other members in the room to notify");
            }
            DispatchOutcome::NoTokens { recipients } => {
                warn!(
                    room_id = %room_id,
                    status,
                    recipients,
                    "No push tokens found for any members"
                );
            }
            DispatchOutcome::Delivered { recipients, report } if report.all_rejected() => {
                error!(
                    room_id = %room_id,
                    status,
                    recipients,
                    failure = report.failure_count,
                    "Multicast rejected for every token"
                );
            }
            DispatchOutcome::Delivered { recipients, report } if report.has_failures() => {
                warn!(
                    room_id = %room_id,
                    status,
                    recipients,
                    success = report.success_count,
                    failure = report.failure_count,
                    "Multicast partially delivered"
                );
            }
            DispatchOutcome::Delivered { recipients, report } => {
                info!(
                    room_id = %room_id,
                    status,
                    recipients,
                    success = report.success_count,
                    "Multicast delivered"
                );
            }
            DispatchOutcome::DeliveryFailed { tokens, reason } => {
                error!(
                    room_id = %room_id,
                    status,
                    tokens,
                    reason = %reason,
                    "Multicast send failed"
                );
            }
            DispatchOutcome::Aborted { reason } => {
                error!(room_id = %room_id, status, reason = %reason, "Dispatch aborted");
            }
        }

        outcome
    }

    /// The fallible dispatch body. Only store failures surface as `Err`;
    /// a push failure is a terminal outcome.
    pub async fn run(
        &self,
        room_id: &RoomId,
        actor: Option<&UserId>,
        payload: &NotificationPayload,
    ) -> AppResult<DispatchOutcome> {
        let Some(room) = lookup::fetch_room(self.store.as_ref(), room_id).await? else {
            return Ok(DispatchOutcome::RoomNotFound);
        };

        let recipients = room.recipients(actor);
        if recipients.is_empty() {
            return Ok(DispatchOutcome::NoRecipients);
        }

        let users = try_join_all(
            recipients
                .iter()
                .map(|user_id| lookup::fetch_user(self.store.as_ref(), user_id)),
        )
        .await?;

        let tokens = collect_tokens(&users);
        debug!(
            room_id = %room_id,
            recipients = recipients.len(),
            tokens = tokens.len(),
            "Resolved push tokens"
        );
        if tokens.is_empty() {
            return Ok(DispatchOutcome::NoTokens {
                recipients: recipients.len(),
            });
        }

        let message = MulticastMessage::new(
            payload.title.clone(),
            payload.body.clone(),
            payload.link.clone(),
            tokens,
        );

        Ok(match self.push.send_multicast(&message).await {
            Ok(report) => DispatchOutcome::Delivered {
                recipients: recipients.len(),
                report,
            },
            Err(e) => DispatchOutcome::DeliveryFailed {
                tokens: message.tokens.len(),
                reason: e.to_string(),
            },
        })
    }
}

/// Tokens of the users that exist and have one.
fn collect_tokens(users: &[Option<User>]) -> Vec<String> {
    users
        .iter()
        .flatten()
        .filter_map(User::push_token)
        .map(String::from)
        .collect()
}
