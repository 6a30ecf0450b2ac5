//! Read-only document store seam.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::result::AppResult;

/// A fetched document: its id plus its fields as plain JSON.
///
/// Store adapters are responsible for decoding any wire-specific value
/// encoding into ordinary JSON before building a `Document`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document id within its collection.
    pub id: String,
    /// Field values.
    pub fields: Map<String, Value>,
}

impl Document {
    /// Create a document from an id and field map.
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Deserialize into a typed model. The document id is exposed to the
    /// model as an `id` field unless the fields already carry one.
    pub fn decode<T: DeserializeOwned>(&self) -> AppResult<T> {
        let mut fields = self.fields.clone();
        fields
            .entry("id")
            .or_insert_with(|| Value::String(self.id.clone()));
        Ok(serde_json::from_value(Value::Object(fields))?)
    }
}

/// Get-by-id access to the managed document database.
///
/// Implementations return `Ok(None)` for an absent document and reserve
/// `Err` for transport or decoding failures.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Short provider name for logs and health output.
    fn provider_type(&self) -> &str;

    /// Fetch `collection/id`.
    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<Document>>;
}
