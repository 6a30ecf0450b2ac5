//! Document store configuration.

use serde::{Deserialize, Serialize};

/// Where room and user documents are read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider: `"firestore"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Project that owns the database.
    #[serde(default)]
    pub project_id: String,
    /// Database name within the project.
    #[serde(default = "default_database")]
    pub database: String,
    /// REST endpoint root (override for the local emulator).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// OAuth bearer token for the REST API. Empty sends no credential,
    /// which is what the emulator expects. Never refreshed; see
    /// `PushConfig::access_token` on expiry.
    #[serde(default)]
    pub access_token: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// JSON file used to seed the `memory` provider.
    #[serde(default)]
    pub seed_file: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            project_id: String::new(),
            database: default_database(),
            base_url: default_base_url(),
            access_token: String::new(),
            request_timeout_seconds: default_request_timeout(),
            seed_file: None,
        }
    }
}

fn default_provider() -> String {
    "firestore".to_string()
}

fn default_database() -> String {
    "(default)".to_string()
}

fn default_base_url() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
