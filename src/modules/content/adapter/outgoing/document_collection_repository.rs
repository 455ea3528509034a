use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::content::application::domain::kinds::CollectionKind;
use crate::modules::content::application::ports::outgoing::{
    CollectionRepository, ContentRepositoryError,
};
use crate::modules::document_store::application::ports::outgoing::{
    Direction, DocumentStore, FieldValue,
};

use super::record_codec::document_into_record;
use super::write_fields::IntoWriteFields;

const ORDER_FIELD: &str = "createdAt";

/// Records of kind `K`, one document each under `K::COLLECTION`.
pub struct DocumentCollectionRepository<K> {
    store: Arc<dyn DocumentStore>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: CollectionKind> DocumentCollectionRepository<K> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _kind: PhantomData,
        }
    }

    async fn read(&self, id: &str) -> Result<Option<K::Record>, ContentRepositoryError> {
        self.store
            .get_document(K::COLLECTION, id)
            .await?
            .map(document_into_record)
            .transpose()
    }
}

#[async_trait]
impl<K> CollectionRepository<K> for DocumentCollectionRepository<K>
where
    K: CollectionKind,
    K::NewRecord: IntoWriteFields,
    K::Patch: IntoWriteFields,
{
    async fn list(&self) -> Result<Vec<K::Record>, ContentRepositoryError> {
        self.store
            .list_documents(K::COLLECTION, ORDER_FIELD, Direction::Descending)
            .await?
            .into_iter()
            .map(document_into_record)
            .collect()
    }

    async fn create(&self, new_record: K::NewRecord) -> Result<K::Record, ContentRepositoryError> {
        let mut fields = new_record.write_fields();
        fields.insert(ORDER_FIELD.to_string(), FieldValue::ServerTimestamp);
        fields.insert("updatedAt".to_string(), FieldValue::ServerTimestamp);

        let id = self.store.add_document(K::COLLECTION, fields).await?;

        self.read(&id)
            .await?
            .ok_or(ContentRepositoryError::CreationFailed)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<K::Record>, ContentRepositoryError> {
        self.read(id).await
    }

    async fn update(&self, id: &str, patch: K::Patch) -> Result<K::Record, ContentRepositoryError> {
        let mut fields = patch.write_fields();
        fields.insert("updatedAt".to_string(), FieldValue::ServerTimestamp);

        self.store.update_document(K::COLLECTION, id, fields).await?;

        // Deleted between the write and the read.
        self.read(id).await?.ok_or(ContentRepositoryError::NotFound)
    }

    async fn delete(&self, id: &str) -> Result<(), ContentRepositoryError> {
        self.store.delete_document(K::COLLECTION, id).await?;
        Ok(())
    }
}
