//! Shared types used across Roomcast crates.

pub mod id;
pub mod path;

pub use id::{ItemId, RoomId, UserId};
pub use path::{DocumentPath, Subcollection};
