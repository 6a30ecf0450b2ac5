//! # roomcast-core
//!
//! Core crate for Roomcast. Contains the document-store and push-service
//! traits, configuration schemas, typed identifiers, room-change events,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Roomcast crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
