//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use roomcast_core::config::AppConfig;
use roomcast_notify::TriggerHandler;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Trigger adapters over the notification dispatcher.
    pub triggers: TriggerHandler,
}

impl AppState {
    /// Create the state from its parts.
    pub fn new(config: Arc<AppConfig>, triggers: TriggerHandler) -> Self {
        Self { config, triggers }
    }
}
