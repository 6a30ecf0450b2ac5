//! Core traits defined in `roomcast-core` and implemented by other crates.

pub mod push;
pub mod store;

pub use push::{MulticastMessage, MulticastReport, PushService, SendResponse};
pub use store::{Document, DocumentStore};
