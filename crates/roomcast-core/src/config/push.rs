//! Push delivery configuration.

use serde::{Deserialize, Serialize};

/// Push-messaging service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Push provider: `"fcm"` or `"log"` (dry run, nothing leaves the process).
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Project the messaging sender belongs to.
    #[serde(default)]
    pub project_id: String,
    /// REST endpoint root.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// OAuth bearer token with the messaging scope.
    ///
    /// Read once at startup and never refreshed. Google access tokens expire
    /// after about an hour, so a long-running deployment must rotate it
    /// (`ROOMCAST__PUSH__ACCESS_TOKEN`) and restart.
    #[serde(default)]
    pub access_token: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Maximum in-flight per-token requests for one multicast.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Origin that relative deep links are resolved against
    /// (e.g. `https://rooms.example.com`). The messaging API only accepts
    /// absolute HTTPS links.
    #[serde(default)]
    pub link_base_url: Option<String>,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            project_id: String::new(),
            base_url: default_base_url(),
            access_token: String::new(),
            request_timeout_seconds: default_request_timeout(),
            max_concurrency: default_max_concurrency(),
            link_base_url: None,
        }
    }
}

fn default_provider() -> String {
    "fcm".to_string()
}

fn default_base_url() -> String {
    "https://fcm.googleapis.com/v1".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_max_concurrency() -> usize {
    16
}
