//! Push service that records multicasts for tests.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use roomcast_core::error::AppError;
use roomcast_core::result::AppResult;
use roomcast_core::traits::push::{MulticastMessage, MulticastReport, PushService, SendResponse};

/// In-memory test double for [`PushService`].
///
/// Every multicast is kept until the recorder is dropped. Tokens listed as rejected
/// are reported as per-token failures, and a configured call failure makes
/// every send return an error.
#[derive(Debug, Default)]
pub struct RecordingPushService {
    sent: Mutex<Vec<MulticastMessage>>,
    rejected_tokens: HashSet<String>,
    call_failure: Option<String>,
}

impl RecordingPushService {
    /// Create a recorder that accepts every token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report these tokens as rejected.
    pub fn with_rejected_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rejected_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Fail every call with `reason`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.call_failure = Some(reason.into());
        self
    }

    /// Multicasts received so far, in call order.
    pub async fn sent(&self) -> Vec<MulticastMessage> {
        self.sent.lock().await.clone()
    }

    /// Number of multicast calls received.
    pub async fn call_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl PushService for RecordingPushService {
    fn provider_type(&self) -> &str {
        "recording"
    }

    async fn send_multicast(&self, message: &MulticastMessage) -> AppResult<MulticastReport> {
        self.sent.lock().await.push(message.clone());

        debug!(
            title = %message.notification.title,
            link = %message.webpush.fcm_options.link,
            tokens = message.tokens.len(),
            "Recorded multicast push"
        );

        if let Some(reason) = &self.call_failure {
            return Err(AppError::external_service(reason.clone()));
        }

        let responses = message
            .tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                if self.rejected_tokens.contains(token) {
                    SendResponse {
                        token: token.clone(),
                        success: false,
                        message_id: None,
                        error: Some("UNREGISTERED".to_string()),
                    }
                } else {
                    SendResponse {
                        token: token.clone(),
                        success: true,
                        message_id: Some(format!("recorded/{i}")),
                        error: None,
                    }
                }
            })
            .collect();

        Ok(MulticastReport::from_responses(responses))
    }
}
