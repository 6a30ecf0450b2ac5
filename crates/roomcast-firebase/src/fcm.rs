//! FCM HTTP v1 push delivery.
//!
//! The v1 API has no multicast endpoint, so a multicast is fanned out as
//! one `messages:send` request per token with bounded concurrency, and the
//! individual results are aggregated into a [`MulticastReport`].

use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use serde_json::{Value, json};
use tracing::{debug, warn};

use roomcast_core::config::push::PushConfig;
use roomcast_core::error::{AppError, ErrorKind};
use roomcast_core::result::AppResult;
use roomcast_core::traits::push::{MulticastMessage, MulticastReport, PushService, SendResponse};

/// Sends through `POST {base_url}/projects/{project}/messages:send`.
#[derive(Debug, Clone)]
pub struct FcmPushService {
    client: reqwest::Client,
    send_url: String,
    access_token: String,
    max_concurrency: usize,
    link_base_url: Option<String>,
}

impl FcmPushService {
    /// Create a push client from configuration.
    pub fn new(config: &PushConfig) -> AppResult<Self> {
        if config.project_id.is_empty() {
            return Err(AppError::configuration(
                "push.project_id is required for the fcm provider",
            ));
        }
        if config.access_token.is_empty() {
            return Err(AppError::configuration(
                "push.access_token is required for the fcm provider",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            client,
            send_url: format!(
                "{}/projects/{}/messages:send",
                config.base_url.trim_end_matches('/'),
                config.project_id
            ),
            access_token: config.access_token.clone(),
            max_concurrency: config.max_concurrency.max(1),
            link_base_url: config
                .link_base_url
                .as_ref()
                .map(|base| base.trim_end_matches('/').to_string())
                .filter(|base| !base.is_empty()),
        })
    }

    /// Resolve a relative deep link against the configured origin.
    fn resolve_link(&self, link: &str) -> String {
        match &self.link_base_url {
            Some(base) if link.starts_with('/') => format!("{base}{link}"),
            _ => link.to_string(),
        }
    }

    async fn send_one(&self, body: Value, token: String) -> SendResponse {
        let result = self
            .client
            .post(&self.send_url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                return SendResponse {
                    token,
                    success: false,
                    message_id: None,
                    error: Some(format!("transport error: {e}")),
                };
            }
        };

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if status.is_success() {
            SendResponse {
                token,
                success: true,
                message_id: body.get("name").and_then(Value::as_str).map(String::from),
                error: None,
            }
        } else {
            SendResponse {
                token,
                success: false,
                message_id: None,
                error: Some(error_code(&body).unwrap_or_else(|| format!("HTTP {status}"))),
            }
        }
    }
}

/// Request body for a single token.
pub(crate) fn request_body(message: &MulticastMessage, token: &str, link: &str) -> Value {
    json!({
        "message": {
            "token": token,
            "notification": {
                "title": message.notification.title,
                "body": message.notification.body,
            },
            "webpush": {
                "fcm_options": { "link": link },
            },
        }
    })
}

/// Most specific error code in an error response body.
pub(crate) fn error_code(body: &Value) -> Option<String> {
    let error = body.get("error")?;
    let detail_code = error
        .get("details")
        .and_then(Value::as_array)
        .and_then(|details| {
            details
                .iter()
                .find_map(|d| d.get("errorCode").and_then(Value::as_str))
        });
    detail_code
        .or_else(|| error.get("status").and_then(Value::as_str))
        .map(String::from)
}

#[async_trait]
impl PushService for FcmPushService {
    fn provider_type(&self) -> &str {
        "fcm"
    }

    async fn send_multicast(&self, message: &MulticastMessage) -> AppResult<MulticastReport> {
        if message.tokens.is_empty() {
            return Ok(MulticastReport::default());
        }

        let link = self.resolve_link(&message.webpush.fcm_options.link);
        let responses: Vec<SendResponse> = stream::iter(message.tokens.iter().cloned())
            .map(|token| {
                let body = request_body(message, &token, &link);
                self.send_one(body, token)
            })
            .buffer_unordered(self.max_concurrency)
            .collect()
            .await;

        for failed in responses.iter().filter(|r| !r.success) {
            warn!(
                error = failed.error.as_deref().unwrap_or("unknown"),
                "Push token rejected"
            );
        }

        let report = MulticastReport::from_responses(responses);
        debug!(
            success = report.success_count,
            failure = report.failure_count,
            "FCM multicast complete"
        );
        Ok(report)
    }
}
