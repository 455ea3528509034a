use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::content::application::domain::kinds::{SingletonKind, SINGLETON_DOCUMENT_ID};
use crate::modules::content::application::ports::outgoing::{
    ContentRepositoryError, SingletonRepository,
};
use crate::modules::document_store::application::ports::outgoing::{
    DocumentStore, FieldValue, SetMode, WriteFields,
};

use super::record_codec::document_into_record;
use super::write_fields::IntoWriteFields;

// ============================================================================
// Repository Implementation
// ============================================================================

/// Singleton kind `K` stored as `{K::COLLECTION}/main`.
pub struct DocumentSingletonRepository<K> {
    store: Arc<dyn DocumentStore>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: SingletonKind> DocumentSingletonRepository<K> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _kind: PhantomData,
        }
    }

    async fn read(&self) -> Result<Option<K::Record>, ContentRepositoryError> {
        self.store
            .get_document(K::COLLECTION, SINGLETON_DOCUMENT_ID)
            .await?
            .map(document_into_record)
            .transpose()
    }

    async fn read_back(&self) -> Result<K::Record, ContentRepositoryError> {
        self.read()
            .await?
            .ok_or(ContentRepositoryError::CreationFailed)
    }

    /// `createdAt` is written once, on whichever write creates the document.
    fn stamped(mut fields: WriteFields, creating: bool) -> WriteFields {
        if K::STAMPS_CREATED_AT {
            let created_at = if creating {
                FieldValue::ServerTimestamp
            } else {
                FieldValue::ServerTimestampIfAbsent
            };
            fields.insert("createdAt".to_string(), created_at);
        }
        fields.insert("updatedAt".to_string(), FieldValue::ServerTimestamp);
        fields
    }

    async fn merge(&self, fields: WriteFields) -> Result<K::Record, ContentRepositoryError> {
        self.store
            .set_document(
                K::COLLECTION,
                SINGLETON_DOCUMENT_ID,
                Self::stamped(fields, false),
                SetMode::Merge,
            )
            .await?;

        self.read_back().await
    }
}

#[async_trait]
impl<K> SingletonRepository<K> for DocumentSingletonRepository<K>
where
    K: SingletonKind,
    K::Fields: IntoWriteFields,
    K::Patch: IntoWriteFields,
{
    async fn get(&self) -> Result<Option<K::Record>, ContentRepositoryError> {
        self.read().await
    }

    async fn create(&self, fields: K::Fields) -> Result<K::Record, ContentRepositoryError> {
        self.store
            .create_document(
                K::COLLECTION,
                SINGLETON_DOCUMENT_ID,
                Self::stamped(fields.write_fields(), true),
            )
            .await?;

        self.read_back().await
    }

    async fn update(&self, patch: K::Patch) -> Result<K::Record, ContentRepositoryError> {
        self.merge(patch.write_fields()).await
    }

    async fn upsert(&self, fields: K::Fields) -> Result<K::Record, ContentRepositoryError> {
        self.merge(fields.write_fields()).await
    }
}

// ============================================================================
// Tests
// ============================================================================
