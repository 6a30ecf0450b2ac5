//! Provider selection from configuration.

use std::sync::Arc;

use tracing::info;

use roomcast_core::config::push::PushConfig;
use roomcast_core::config::store::StoreConfig;
use roomcast_core::error::AppError;
use roomcast_core::result::AppResult;
use roomcast_core::traits::push::PushService;
use roomcast_core::traits::store::DocumentStore;

use crate::dry_run::DryRunPushService;
use crate::fcm::FcmPushService;
use crate::firestore::FirestoreDocumentStore;
use crate::memory::MemoryDocumentStore;

/// Build the configured document store.
pub async fn build_document_store(config: &StoreConfig) -> AppResult<Arc<dyn DocumentStore>> {
    let store: Arc<dyn DocumentStore> = match config.provider.as_str() {
        "firestore" => {
            info!(
                project = %config.project_id,
                database = %config.database,
                "Initializing Firestore document store"
            );
            Arc::new(FirestoreDocumentStore::new(config)?)
        }
        "memory" => {
            info!("Initializing in-memory document store");
            match &config.seed_file {
                Some(path) => Arc::new(MemoryDocumentStore::from_seed_file(path).await?),
                None => Arc::new(MemoryDocumentStore::new()),
            }
        }
        other => {
            return Err(AppError::configuration(format!(
                "Unknown store provider: '{other}'. Supported: firestore, memory"
            )));
        }
    };
    Ok(store)
}

/// Build the configured push service.
pub fn build_push_service(config: &PushConfig) -> AppResult<Arc<dyn PushService>> {
    let push: Arc<dyn PushService> = match config.provider.as_str() {
        "fcm" => {
            info!(project = %config.project_id, "Initializing FCM push service");
            Arc::new(FcmPushService::new(config)?)
        }
        "log" => {
            info!("Initializing logging push service (dry run)");
            Arc::new(DryRunPushService::new())
        }
        other => {
            return Err(AppError::configuration(format!(
                "Unknown push provider: '{other}'. Supported: fcm, log"
            )));
        }
    };
    Ok(push)
}
