//! Push-messaging service seam and its multicast wire types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// Title and body shown by the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushNotification {
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
}

/// Web-push specific options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebpushConfig {
    /// Options interpreted by the messaging SDK.
    pub fcm_options: WebpushFcmOptions,
}

/// Click-through target for web notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebpushFcmOptions {
    /// Relative or absolute URL opened on click.
    pub link: String,
}

/// One notification addressed to many device tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MulticastMessage {
    /// What to display.
    pub notification: PushNotification,
    /// Web-push options (deep link).
    pub webpush: WebpushConfig,
    /// Registration tokens to deliver to.
    pub tokens: Vec<String>,
}

impl MulticastMessage {
    /// Build a multicast with a deep link.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        link: impl Into<String>,
        tokens: Vec<String>,
    ) -> Self {
        Self {
            notification: PushNotification {
                title: title.into(),
                body: body.into(),
            },
            webpush: WebpushConfig {
                fcm_options: WebpushFcmOptions { link: link.into() },
            },
            tokens,
        }
    }
}

/// Outcome for a single token of a multicast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    /// The token this response is for.
    pub token: String,
    /// Whether the service accepted the message for this token.
    pub success: bool,
    /// Service-assigned message name on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Service error description on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregated per-token results of one multicast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MulticastReport {
    /// Tokens accepted.
    pub success_count: usize,
    /// Tokens rejected.
    pub failure_count: usize,
    /// Per-token detail, in no particular order.
    pub responses: Vec<SendResponse>,
}

impl MulticastReport {
    /// Build a report, deriving the counts from the responses.
    pub fn from_responses(responses: Vec<SendResponse>) -> Self {
        let success_count = responses.iter().filter(|r| r.success).count();
        Self {
            success_count,
            failure_count: responses.len() - success_count,
            responses,
        }
    }

    /// Whether at least one token was rejected.
    pub fn has_failures(&self) -> bool {
        self.failure_count > 0
    }

    /// Whether the multicast was addressed to tokens and every one was rejected.
    pub fn all_rejected(&self) -> bool {
        self.success_count == 0 && self.failure_count > 0
    }
}

/// Multicast push delivery.
///
/// A returned `Err` means the call as a whole failed; per-token rejections
/// are reported inside the [`MulticastReport`].
#[async_trait]
pub trait PushService: Send + Sync + std::fmt::Debug + 'static {
    /// Short provider name for logs and health output.
    fn provider_type(&self) -> &str;

    /// Send one message to every token in `message.tokens`.
    async fn send_multicast(&self, message: &MulticastMessage) -> AppResult<MulticastReport>;
}
