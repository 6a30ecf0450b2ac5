//! Request DTOs.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use roomcast_core::error::AppError;
use roomcast_core::result::AppResult;
use roomcast_core::traits::store::Document;
use roomcast_core::types::path::{DocumentPath, Subcollection};
use roomcast_firebase::firestore::decode_fields;

/// A document snapshot carried by a change event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDocument {
    /// Full resource name of the document.
    #[serde(default)]
    pub name: Option<String>,
    /// Fields in typed-value encoding.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Body of every trigger endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEventRequest {
    /// Path or resource name of the changed document. Falls back to the
    /// snapshots' `name` when absent.
    #[serde(default)]
    pub document: Option<String>,
    /// Created document, or the after-snapshot of an update.
    #[serde(default)]
    pub value: Option<EventDocument>,
    /// Before-snapshot of an update, or the deleted document.
    #[serde(default)]
    pub old_value: Option<EventDocument>,
}

impl DocumentEventRequest {
    /// Parse the document path and check it belongs to `expected`.
    pub fn path(&self, expected: Subcollection) -> AppResult<DocumentPath> {
        let raw = self
            .document
            .as_deref()
            .or_else(|| self.value.as_ref().and_then(|d| d.name.as_deref()))
            .or_else(|| self.old_value.as_ref().and_then(|d| d.name.as_deref()))
            .ok_or_else(|| AppError::validation("Event names no document"))?;
        DocumentPath::parse(raw)?.expect_subcollection(expected)
    }

    /// Decode `value`.
    pub fn new_value<T: DeserializeOwned>(&self, path: &DocumentPath) -> AppResult<T> {
        decode_snapshot(self.value.as_ref(), path, "value")
    }

    /// Decode `oldValue`.
    pub fn old_value<T: DeserializeOwned>(&self, path: &DocumentPath) -> AppResult<T> {
        decode_snapshot(self.old_value.as_ref(), path, "oldValue")
    }

    /// Decode the deleted document: `oldValue`, else `value`.
    pub fn deleted_value<T: DeserializeOwned>(&self, path: &DocumentPath) -> AppResult<T> {
        match &self.old_value {
            Some(_) => self.old_value(path),
            None => self.new_value(path),
        }
    }
}

fn decode_snapshot<T: DeserializeOwned>(
    snapshot: Option<&EventDocument>,
    path: &DocumentPath,
    which: &str,
) -> AppResult<T> {
    let snapshot =
        snapshot.ok_or_else(|| AppError::validation(format!("Event is missing '{which}'")))?;
    let fields = decode_fields(&snapshot.fields)?;
    Document::new(path.item_id.as_str(), fields)
        .decode()
        .map_err(|e| AppError::validation(format!("Invalid '{which}' for {path}: {}", e.message)))
}
