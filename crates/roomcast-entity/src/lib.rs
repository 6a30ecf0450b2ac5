//! # roomcast-entity
//!
//! Document models for the collections Roomcast reads. Field names follow
//! the store's camelCase convention.

pub mod message;
pub mod room;
pub mod task;
pub mod user;

pub use message::Message;
pub use room::Room;
pub use task::Task;
pub use user::User;

/// Top-level collection holding room documents.
pub const ROOMS_COLLECTION: &str = "rooms";

/// Top-level collection holding user documents.
pub const USERS_COLLECTION: &str = "users";
