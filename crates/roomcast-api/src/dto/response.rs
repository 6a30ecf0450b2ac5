//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use roomcast_core::config::client::ClientConfig;
use roomcast_notify::DispatchOutcome;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Result of handling one trigger event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerResponse {
    /// Delivery id assigned to the event.
    pub event_id: Uuid,
    /// Event kind.
    pub kind: String,
    /// Changed document path.
    pub document: String,
    /// Whether the event led to a dispatch.
    pub dispatched: bool,
    /// Dispatch outcome, absent when the event was ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<DispatchOutcome>,
}

/// Public web-client configuration as the browser SDK expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigResponse {
    /// Browser API key.
    pub api_key: String,
    /// Auth domain.
    pub auth_domain: String,
    /// Project identifier.
    pub project_id: String,
    /// Storage bucket.
    pub storage_bucket: String,
    /// Messaging sender identifier.
    pub messaging_sender_id: String,
    /// Web app identifier.
    pub app_id: String,
}

impl From<&ClientConfig> for ClientConfigResponse {
    fn from(config: &ClientConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            auth_domain: config.auth_domain.clone(),
            project_id: config.project_id.clone(),
            storage_bucket: config.storage_bucket.clone(),
            messaging_sender_id: config.messaging_sender_id.clone(),
            app_id: config.app_id.clone(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Document store provider.
    pub store: String,
    /// Push provider.
    pub push: String,
}
