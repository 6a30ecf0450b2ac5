//! # roomcast-api
//!
//! HTTP layer for Roomcast built on Axum.
//!
//! Receives document-change events on the trigger endpoints, serves the
//! public web-client configuration, and maps [`AppError`] into JSON error
//! responses.
//!
//! [`AppError`]: roomcast_core::AppError

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
