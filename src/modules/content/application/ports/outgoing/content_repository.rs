// src/modules/content/application/ports/outgoing/content_repository.rs

use async_trait::async_trait;

use crate::modules::content::application::domain::kinds::{CollectionKind, SingletonKind};
use crate::modules::document_store::application::ports::outgoing::DocumentStoreError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Record already exists")]
    AlreadyExists,

    /// The write went through but reading it back returned nothing.
    #[error("Record missing after write")]
    CreationFailed,

    #[error("Store unreachable: {0}")]
    Network(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<DocumentStoreError> for ContentRepositoryError {
    fn from(e: DocumentStoreError) -> Self {
        match e {
            DocumentStoreError::NotFound => ContentRepositoryError::NotFound,
            DocumentStoreError::AlreadyExists => ContentRepositoryError::AlreadyExists,
            DocumentStoreError::Network(msg) => ContentRepositoryError::Network(msg),
            DocumentStoreError::Serialization(msg) => ContentRepositoryError::Serialization(msg),
            DocumentStoreError::Database(msg) | DocumentStoreError::InvalidField(msg) => {
                ContentRepositoryError::Store(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Repositories
// ──────────────────────────────────────────────────────────
//

/// Read and write access to the single document of kind `K`.
///
/// Every successful write returns the record as read back from the store.
#[async_trait]
pub trait SingletonRepository<K: SingletonKind>: Send + Sync {
    /// `Ok(None)` until the first successful write.
    async fn get(&self) -> Result<Option<K::Record>, ContentRepositoryError>;

    /// Fails with `AlreadyExists` when the document is present.
    async fn create(&self, fields: K::Fields) -> Result<K::Record, ContentRepositoryError>;

    /// Merges the patch, creating the document when it is absent.
    async fn update(&self, patch: K::Patch) -> Result<K::Record, ContentRepositoryError>;

    /// Creates or merges the full field set in one write.
    async fn upsert(&self, fields: K::Fields) -> Result<K::Record, ContentRepositoryError>;
}

#[async_trait]
pub trait CollectionRepository<K: CollectionKind>: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<K::Record>, ContentRepositoryError>;

    async fn create(&self, new_record: K::NewRecord) -> Result<K::Record, ContentRepositoryError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<K::Record>, ContentRepositoryError>;

    /// Fails with `NotFound` when `id` does not exist.
    async fn update(&self, id: &str, patch: K::Patch) -> Result<K::Record, ContentRepositoryError>;

    /// Deleting an unknown id succeeds.
    async fn delete(&self, id: &str) -> Result<(), ContentRepositoryError>;
}
