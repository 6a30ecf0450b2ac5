//! Public web-client configuration.

use serde::{Deserialize, Serialize};

/// Values the static pages need to initialise their SDK.
///
/// None of these are secrets; they are served verbatim by
/// `GET /client-config` in camelCase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Browser API key.
    #[serde(default)]
    pub api_key: String,
    /// Auth domain.
    #[serde(default)]
    pub auth_domain: String,
    /// Project identifier.
    #[serde(default)]
    pub project_id: String,
    /// Storage bucket.
    #[serde(default)]
    pub storage_bucket: String,
    /// Messaging sender identifier.
    #[serde(default)]
    pub messaging_sender_id: String,
    /// Web app identifier.
    #[serde(default)]
    pub app_id: String,
}
