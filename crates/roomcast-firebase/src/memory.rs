//! In-memory document store.

use std::path::Path;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{Map, Value};
use tracing::info;

use roomcast_core::error::AppError;
use roomcast_core::result::AppResult;
use roomcast_core::traits::store::{Document, DocumentStore};

/// Documents held in a concurrent map keyed by `collection/id`.
///
/// Seed files are JSON objects of the form
/// `{"rooms": {"R1": {...fields}}, "users": {"A": {...fields}}}` with
/// plain (not typed-value) field JSON.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: DashMap<String, Map<String, Value>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from a seed value.
    pub fn from_seed(seed: Value) -> AppResult<Self> {
        let store = Self::new();
        let Value::Object(collections) = seed else {
            return Err(AppError::validation("Seed must be a JSON object"));
        };

        for (collection, documents) in collections {
            let Value::Object(documents) = documents else {
                return Err(AppError::validation(format!(
                    "Seed collection '{collection}' must be an object of documents"
                )));
            };
            for (id, fields) in documents {
                let Value::Object(fields) = fields else {
                    return Err(AppError::validation(format!(
                        "Seed document '{collection}/{id}' must be an object"
                    )));
                };
                store.insert(&collection, &id, fields);
            }
        }

        Ok(store)
    }

    /// Load a seed file from disk.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::configuration(format!(
                "Failed to read seed file '{}': {e}",
                path.display()
            ))
        })?;
        let store = Self::from_seed(serde_json::from_str(&raw)?)?;
        info!(
            path = %path.display(),
            documents = store.len(),
            "Seeded in-memory document store"
        );
        Ok(store)
    }

    /// Insert or replace a document.
    pub fn insert(&self, collection: &str, id: &str, fields: Map<String, Value>) {
        self.documents.insert(Self::key(collection, id), fields);
    }

    /// Remove a document. Returns `true` if it existed.
    pub fn remove(&self, collection: &str, id: &str) -> bool {
        self.documents.remove(&Self::key(collection, id)).is_some()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn key(collection: &str, id: &str) -> String {
        format!("{collection}/{id}")
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<Document>> {
        Ok(self
            .documents
            .get(&Self::key(collection, id))
            .map(|fields| Document::new(id, fields.value().clone())))
    }
}
