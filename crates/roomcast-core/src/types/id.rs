//! Newtype wrappers around document identifiers.
//!
//! Document ids are opaque strings assigned by the store. Using distinct
//! types prevents accidentally passing a `UserId` where a `RoomId` is
//! expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Macro to define a newtype ID wrapper around a document id string.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing document id.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Wrap a document id, rejecting empty or slash-containing values.
            pub fn parse(id: &str) -> Result<Self, AppError> {
                if id.is_empty() || id.contains('/') {
                    return Err(AppError::validation(format!(
                        "Invalid {} '{}'",
                        stringify!($name),
                        id
                    )));
                }
                Ok(Self(id.to_string()))
            }

            /// Borrow the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a room document.
    RoomId
);

define_id!(
    /// Identifier of a user document (the auth provider's uid).
    UserId
);

define_id!(
    /// Identifier of a message or task inside a room subcollection.
    ItemId
);
