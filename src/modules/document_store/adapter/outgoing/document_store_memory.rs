use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::modules::document_store::application::field_merge::{
    apply_write, order_documents, validate_field_name,
};
use crate::modules::document_store::application::ports::outgoing::{
    Direction, Document, DocumentFields, DocumentStore, DocumentStoreError, SetMode, WriteFields,
};
use crate::modules::document_store::application::server_clock::ServerClock;

type Key = (String, String);

/// Process-local document store.
///
/// Backs `STORE_BACKEND=memory` and the repository tests. `set_offline(true)`
/// makes every call fail with `Network` until switched back.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<Key, DocumentFields>>,
    clock: ServerClock,
    offline: AtomicBool,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of documents across all collections.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn ensure_online(&self) -> Result<(), DocumentStoreError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(DocumentStoreError::Network(
                "document store is unreachable".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

fn key(collection: &str, id: &str) -> Key {
    (collection.to_string(), id.to_string())
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        self.ensure_online()?;

        let documents = self.documents.read().await;
        Ok(documents.get(&key(collection, id)).map(|fields| Document {
            id: id.to_string(),
            fields: fields.clone(),
        }))
    }

    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: WriteFields,
        mode: SetMode,
    ) -> Result<(), DocumentStoreError> {
        self.ensure_online()?;

        let mut documents = self.documents.write().await;
        let k = key(collection, id);
        let merged = apply_write(documents.get(&k), fields, mode, &self.clock.now());
        documents.insert(k, merged);

        debug!(collection, id, ?mode, "document set");
        Ok(())
    }

    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        fields: WriteFields,
    ) -> Result<(), DocumentStoreError> {
        self.ensure_online()?;

        let mut documents = self.documents.write().await;
        let k = key(collection, id);
        if documents.contains_key(&k) {
            return Err(DocumentStoreError::AlreadyExists);
        }

        let created = apply_write(None, fields, SetMode::Replace, &self.clock.now());
        documents.insert(k, created);

        debug!(collection, id, "document created");
        Ok(())
    }

    async fn add_document(
        &self,
        collection: &str,
        fields: WriteFields,
    ) -> Result<String, DocumentStoreError> {
        self.ensure_online()?;

        let id = Uuid::new_v4().simple().to_string();
        let created = apply_write(None, fields, SetMode::Replace, &self.clock.now());
        self.documents
            .write()
            .await
            .insert(key(collection, &id), created);

        debug!(collection, id = %id, "document added");
        Ok(id)
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: WriteFields,
    ) -> Result<(), DocumentStoreError> {
        self.ensure_online()?;

        let mut documents = self.documents.write().await;
        let current = documents
            .get_mut(&key(collection, id))
            .ok_or(DocumentStoreError::NotFound)?;

        *current = apply_write(Some(&*current), fields, SetMode::Merge, &self.clock.now());

        debug!(collection, id, "document updated");
        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError> {
        self.ensure_online()?;

        let removed = self.documents.write().await.remove(&key(collection, id));

        debug!(collection, id, existed = removed.is_some(), "document deleted");
        Ok(())
    }

    async fn list_documents(
        &self,
        collection: &str,
        order_by: &str,
        direction: Direction,
    ) -> Result<Vec<Document>, DocumentStoreError> {
        self.ensure_online()?;
        validate_field_name(order_by)?;

        let documents: Vec<Document> = self
            .documents
            .read()
            .await
            .iter()
            .filter(|((c, _), _)| c == collection)
            .map(|((_, id), fields)| Document {
                id: id.clone(),
                fields: fields.clone(),
            })
            .collect();

        Ok(order_documents(documents, order_by, direction))
    }
}
