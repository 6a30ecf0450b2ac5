//! Firestore REST document store and typed-value codec.

pub mod client;
pub mod value;

pub use client::FirestoreDocumentStore;
pub use value::{decode_fields, decode_value};
