// src/modules/document_store/application/ports/outgoing/document_store.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Map, Value};

//
// ──────────────────────────────────────────────────────────
// Documents
// ──────────────────────────────────────────────────────────
//

/// Stored fields of one document, without its id.
pub type DocumentFields = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: DocumentFields,
}

/// A single field write. Timestamps are never supplied by callers: the store
/// resolves the sentinels with its own clock.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Set(Value),
    /// Remove the field. No-op when the field is absent.
    Delete,
    ServerTimestamp,
    /// Stamp only when the document does not already carry the field.
    ServerTimestampIfAbsent,
}

impl FieldValue {
    pub fn set(value: impl Into<Value>) -> Self {
        FieldValue::Set(value.into())
    }
}

pub type WriteFields = BTreeMap<String, FieldValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetMode {
    /// Fields not supplied are preserved; creates the document when absent.
    Merge,
    /// The document is fully replaced.
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("Document not found")]
    NotFound,

    #[error("Document already exists")]
    AlreadyExists,

    /// The store could not be reached. Reads may be served from a snapshot.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid field name: {0}")]
    InvalidField(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// `Ok(None)` when the document does not exist.
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError>;

    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: WriteFields,
        mode: SetMode,
    ) -> Result<(), DocumentStoreError>;

    /// Create-if-absent. Fails with `AlreadyExists` when the id is taken.
    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        fields: WriteFields,
    ) -> Result<(), DocumentStoreError>;

    /// Creates a document under a store-generated id and returns that id.
    async fn add_document(
        &self,
        collection: &str,
        fields: WriteFields,
    ) -> Result<String, DocumentStoreError>;

    /// Merges into an existing document. Fails with `NotFound` otherwise.
    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: WriteFields,
    ) -> Result<(), DocumentStoreError>;

    /// Deleting an absent document is a no-op.
    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError>;

    /// Every document of the collection carrying `order_by`, sorted by it.
    async fn list_documents(
        &self,
        collection: &str,
        order_by: &str,
        direction: Direction,
    ) -> Result<Vec<Document>, DocumentStoreError>;
}
