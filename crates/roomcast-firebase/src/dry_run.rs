//! Push service that only logs (`push.provider = "log"`).

use async_trait::async_trait;
use tracing::info;

use roomcast_core::result::AppResult;
use roomcast_core::traits::push::{MulticastMessage, MulticastReport, PushService, SendResponse};

/// Dry-run push delivery for local runs.
///
/// Each multicast is logged and reported as delivered to every token.
/// Nothing is kept between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunPushService;

impl DryRunPushService {
    /// Create the service.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PushService for DryRunPushService {
    fn provider_type(&self) -> &str {
        "log"
    }

    async fn send_multicast(&self, message: &MulticastMessage) -> AppResult<MulticastReport> {
        info!(
            title = %message.notification.title,
            body = %message.notification.body,
            link = %message.webpush.fcm_options.link,
            tokens = message.tokens.len(),
            "Dry-run multicast push"
        );

        let responses = message
            .tokens
            .iter()
            .enumerate()
            .map(|(i, token)| SendResponse {
                token: token.clone(),
                success: true,
                message_id: Some(format!("dry-run/{i}")),
                error: None,
            })
            .collect();

        Ok(MulticastReport::from_responses(responses))
    }
}
