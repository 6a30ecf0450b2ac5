//! Firestore REST API document store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use roomcast_core::config::store::StoreConfig;
use roomcast_core::error::{AppError, ErrorKind};
use roomcast_core::result::AppResult;
use roomcast_core::traits::store::{Document, DocumentStore};

use super::value::decode_fields;

/// Reads documents through `GET .../documents/{collection}/{id}`.
#[derive(Debug, Clone)]
pub struct FirestoreDocumentStore {
    client: reqwest::Client,
    documents_url: Url,
    access_token: Option<String>,
}

/// Wire shape of a fetched document.
#[derive(Debug, Deserialize)]
struct RawDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

impl FirestoreDocumentStore {
    /// Create a store client from configuration.
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        if config.project_id.is_empty() {
            return Err(AppError::configuration(
                "store.project_id is required for the firestore provider",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        let raw_url = format!(
            "{}/projects/{}/databases/{}/documents",
            config.base_url.trim_end_matches('/'),
            config.project_id,
            config.database
        );
        let documents_url = Url::parse(&raw_url).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid store.base_url '{}': {e}", config.base_url),
                e,
            )
        })?;
        if documents_url.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "store.base_url '{}' cannot carry a document path",
                config.base_url
            )));
        }

        let access_token = Some(config.access_token.clone()).filter(|t| !t.is_empty());

        Ok(Self {
            client,
            documents_url,
            access_token,
        })
    }

    /// Full URL of `collection/id`, each segment percent-encoded.
    fn document_url(&self, collection: &str, id: &str) -> AppResult<Url> {
        let mut url = self.documents_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AppError::configuration(format!(
                    "Document base '{}' cannot carry a path",
                    self.documents_url
                ))
            })?
            .push(collection)
            .push(id);
        Ok(url)
    }
}

/// Turn a REST response body into a [`Document`].
pub(crate) fn document_from_response(body: Value) -> AppResult<Document> {
    let raw: RawDocument = serde_json::from_value(body)?;
    let id = raw
        .name
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::validation(format!("Malformed document name '{}'", raw.name)))?
        .to_string();
    Ok(Document::new(id, decode_fields(&raw.fields)?))
}

#[async_trait]
impl DocumentStore for FirestoreDocumentStore {
    fn provider_type(&self) -> &str {
        "firestore"
    }

    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<Document>> {
        // An empty id would address the collection itself.
        if id.is_empty() {
            debug!(collection, "Empty document id, treating as absent");
            return Ok(None);
        }

        let url = self.document_url(collection, id)?;
        let mut request = self.client.get(url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Document read '{collection}/{id}' failed: {e}"),
                e,
            )
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(collection, id, "Document not found");
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "Document read '{collection}/{id}' returned HTTP {status}: {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Document read '{collection}/{id}' returned an unreadable body: {e}"),
                e,
            )
        })?;

        document_from_response(body).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_requires_project_id() {
        let err = FirestoreDocumentStore::new(&StoreConfig::default()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_document_url() {
        let config = StoreConfig {
            project_id: "demo".into(),
            base_url: "http://localhost:8081/v1/".into(),
            ..StoreConfig::default()
        };
        let store = FirestoreDocumentStore::new(&config).unwrap();
        assert_eq!(
            store.document_url("rooms", "R1").unwrap().as_str(),
            "http://localhost:8081/v1/projects/demo/databases/(default)/documents/rooms/R1"
        );
        assert!(store.access_token.is_none());
    }

    #[test]
    fn test_document_url_escapes_ids() {
        let config = StoreConfig {
            project_id: "demo".into(),
            ..StoreConfig::default()
        };
        let store = FirestoreDocumentStore::new(&config).unwrap();

        let hashed = store.document_url("users", "u#1").unwrap();
        assert!(hashed.path().ends_with("/documents/users/u%231"));
        assert_eq!(hashed.fragment(), None);

        let nested = store.document_url("users", "a/b").unwrap();
        assert!(nested.path().ends_with("/documents/users/a%2Fb"));

        let spaced = store.document_url("users", "x y?%").unwrap();
        assert!(spaced.path().ends_with("/documents/users/x%20y%3F%25"));
        assert_eq!(spaced.query(), None);
    }

    #[tokio::test]
    async fn test_empty_id_is_absent_without_request() {
        let config = StoreConfig {
            project_id: "demo".into(),
            base_url: "http://127.0.0.1:9/v1".into(),
            ..StoreConfig::default()
        };
        let store = FirestoreDocumentStore::new(&config).unwrap();
        assert!(store.get("users", "").await.unwrap().is_none());
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        let config = StoreConfig {
            project_id: "demo".into(),
            base_url: "not a url".into(),
            ..StoreConfig::default()
        };
        let err = FirestoreDocumentStore::new(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_document_from_response() {
        let doc = document_from_response(json!({
            "name": "projects/demo/databases/(default)/documents/users/B",
            "fields": {"fcmToken": {"stringValue": "tB"}},
            "createTime": "2024-05-01T10:00:00Z",
            "updateTime": "2024-05-01T10:00:00Z",
        }))
        .unwrap();
        assert_eq!(doc.id, "B");
        assert_eq!(doc.fields.get("fcmToken"), Some(&json!("tB")));
    }

    #[test]
    fn test_document_without_fields() {
        let doc = document_from_response(json!({
            "name": "projects/demo/databases/(default)/documents/users/C",
        }))
        .unwrap();
        assert_eq!(doc.id, "C");
        assert!(doc.fields.is_empty());
    }
}
