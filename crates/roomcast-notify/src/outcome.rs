//! Terminal states of a dispatch.

use serde::{Deserialize, Serialize};

use roomcast_core::traits::push::MulticastReport;

/// How a dispatch ended. Every variant is a normal return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// The room document does not exist.
    RoomNotFound,
    /// Nobody but the actor is in the room.
    NoRecipients,
    /// No recipient has a push token.
    NoTokens {
        /// Recipients that were looked up.
        recipients: usize,
    },
    /// The multicast was accepted; individual tokens may still have failed.
    Delivered {
        /// Recipients that were looked up.
        recipients: usize,
        /// Per-token results.
        report: MulticastReport,
    },
    /// The push call as a whole failed.
    DeliveryFailed {
        /// Tokens the multicast was addressed to.
        tokens: usize,
        /// Service error.
        reason: String,
    },
    /// A lookup failed before anything was sent.
    Aborted {
        /// Store error.
        reason: String,
    },
}

impl DispatchOutcome {
    /// Short machine name for logging. Matches the serialized `status` tag.
    pub fn status(&self) -> &'static str {
        match self {
            Self::RoomNotFound => "room_not_found",
            Self::NoRecipients => "no_recipients",
            Self::NoTokens { .. } => "no_tokens",
            Self::Delivered { .. } => "delivered",
            Self::DeliveryFailed { .. } => "delivery_failed",
            Self::Aborted { .. } => "aborted",
        }
    }
}
