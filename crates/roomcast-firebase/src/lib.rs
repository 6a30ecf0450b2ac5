//! # roomcast-firebase
//!
//! Implementations of the [`DocumentStore`] and [`PushService`] seams:
//! the Firestore REST API and FCM HTTP v1 for production, an in-memory
//! store and a logging push service for local runs, and a recording push
//! service for tests.
//!
//! [`DocumentStore`]: roomcast_core::traits::DocumentStore
//! [`PushService`]: roomcast_core::traits::PushService

pub mod dry_run;
pub mod fcm;
pub mod firestore;
pub mod memory;
pub mod providers;
pub mod recording;

pub use dry_run::DryRunPushService;
pub use fcm::FcmPushService;
pub use firestore::FirestoreDocumentStore;
pub use memory::MemoryDocumentStore;
pub use providers::{build_document_store, build_push_service};
pub use recording::RecordingPushService;
