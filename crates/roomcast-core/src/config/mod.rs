//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and `ROOMCAST__*` environment variables. Each sub-module
//! represents a logical configuration section, and every field carries a
//! default so that a missing file still yields a runnable configuration.

pub mod app;
pub mod client;
pub mod logging;
pub mod push;
pub mod store;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::client::ClientConfig;
use self::logging::LoggingConfig;
use self::push::PushConfig;
use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// configuration (default.toml + environment overlay + env variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Document store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Push delivery settings.
    #[serde(default)]
    pub push: PushConfig,
    /// Public web-client configuration served to the static pages.
    #[serde(default)]
    pub client: ClientConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files in `dir`.
    ///
    /// Merges `{dir}/default` with the `{dir}/{env}` overlay and
    /// environment variables prefixed with `ROOMCAST__`
    /// (e.g. `ROOMCAST__PUSH__ACCESS_TOKEN`).
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("ROOMCAST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
