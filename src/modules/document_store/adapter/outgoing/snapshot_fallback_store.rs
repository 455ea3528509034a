use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::modules::document_store::application::ports::outgoing::{
    Direction, Document, DocumentStore, DocumentStoreError, SetMode, WriteFields,
};

type DocumentKey = (String, String);
type ListKey = (String, String, bool);

#[derive(Default)]
struct Snapshots {
    documents: HashMap<DocumentKey, Option<Document>>,
    lists: HashMap<ListKey, Vec<Document>>,
}

/// Serves the last successful read when the wrapped store is unreachable.
///
/// Only `Network` failures fall back; without a snapshot the error is
/// returned unchanged. Writes and deletes forget the snapshot of the touched
/// document and every list snapshot of its collection.
pub struct SnapshotFallbackStore<S> {
    inner: S,
    snapshots: RwLock<Snapshots>,
}

impl<S: DocumentStore> SnapshotFallbackStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            snapshots: RwLock::new(Snapshots::default()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    async fn forget(&self, collection: &str, id: &str) {
        let mut snapshots = self.snapshots.write().await;
        snapshots
            .documents
            .remove(&(collection.to_string(), id.to_string()));
        snapshots.lists.retain(|(c, _, _), _| c != collection);
    }
}

fn list_key(collection: &str, order_by: &str, direction: Direction) -> ListKey {
    (
        collection.to_string(),
        order_by.to_string(),
        direction == Direction::Descending,
    )
}

#[async_trait]
impl<S: DocumentStore> DocumentStore for SnapshotFallbackStore<S> {
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let key = (collection.to_string(), id.to_string());

        match self.inner.get_document(collection, id).await {
            Ok(document) => {
                self.snapshots
                    .write()
                    .await
                    .documents
                    .insert(key, document.clone());
                Ok(document)
            }
            Err(DocumentStoreError::Network(reason)) => {
                match self.snapshots.read().await.documents.get(&key) {
                    Some(snapshot) => {
                        warn!(collection, id, %reason, "store unreachable, serving snapshot");
                        Ok(snapshot.clone())
                    }
                    None => Err(DocumentStoreError::Network(reason)),
                }
            }
            Err(e) => Err(e),
        }
    }

    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: WriteFields,
        mode: SetMode,
    ) -> Result<(), DocumentStoreError> {
        let result = self.inner.set_document(collection, id, fields, mode).await;
        self.forget(collection, id).await;
        result
    }

    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        fields: WriteFields,
    ) -> Result<(), DocumentStoreError> {
        let result = self.inner.create_document(collection, id, fields).await;
        self.forget(collection, id).await;
        result
    }

    async fn add_document(
        &self,
        collection: &str,
        fields: WriteFields,
    ) -> Result<String, DocumentStoreError> {
        let id = self.inner.add_document(collection, fields).await?;
        self.forget(collection, &id).await;
        Ok(id)
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: WriteFields,
    ) -> Result<(), DocumentStoreError> {
        let result = self.inner.update_document(collection, id, fields).await;
        self.forget(collection, id).await;
        result
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError> {
        let result = self.inner.delete_document(collection, id).await;
        self.forget(collection, id).await;
        result
    }

    async fn list_documents(
        &self,
        collection: &str,
        order_by: &str,
        direction: Direction,
    ) -> Result<Vec<Document>, DocumentStoreError> {
        let key = list_key(collection, order_by, direction);

        match self
            .inner
            .list_documents(collection, order_by, direction)
            .await
        {
            Ok(documents) => {
                let mut snapshots = self.snapshots.write().await;
                for document in &documents {
                    snapshots.documents.insert(
                        (collection.to_string(), document.id.clone()),
                        Some(document.clone()),
                    );
                }
                snapshots.lists.insert(key, documents.clone());
                Ok(documents)
            }
            Err(DocumentStoreError::Network(reason)) => {
                match self.snapshots.read().await.lists.get(&key) {
                    Some(snapshot) => {
                        warn!(collection, %reason, "store unreachable, serving list snapshot");
                        Ok(snapshot.clone())
                    }
                    None => Err(DocumentStoreError::Network(reason)),
                }
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::document_store::adapter::outgoing::InMemoryDocumentStore;
    use crate::modules::document_store::application::ports::outgoing::FieldValue;
    use serde_json::json;

    fn write(pairs: &[(&str, serde_json::Value)]) -> WriteFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), FieldValue::Set(v.clone())))
            .collect()
    }

    async fn seeded() -> SnapshotFallbackStore<InMemoryDocumentStore> {
        let store = SnapshotFallbackStore::new(InMemoryDocumentStore::new());
        store
            .set_document(
                "profile",
                "main",
                write(&[("firstName", json!("Ada"))]),
                SetMode::Merge,
            )
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn network_failure_without_snapshot_propagates() {
        let store = seeded().await;
        store.inner().set_offline(true);

        let result = store.get_document("profile", "main").await;

        assert!(matches!(result, Err(DocumentStoreError::Network(_))));
    }

    #[tokio::test]
    async fn network_failure_serves_last_read() {
        let store = seeded().await;
        let online = store.get_document("profile", "main").await.unwrap();

        store.inner().set_offline(true);
        let offline = store.get_document("profile", "main").await.unwrap();

        assert_eq!(online, offline);
        assert_eq!(offline.unwrap().fields["firstName"], "Ada");
    }

    #[tokio::test]
    async fn absence_is_a_valid_snapshot() {
        let store = SnapshotFallbackStore::new(InMemoryDocumentStore::new());
        assert_eq!(store.get_document("about", "main").await, Ok(None));

        store.inner().set_offline(true);
        assert_eq!(store.get_document("about", "main").await, Ok(None));
    }

    #[tokio::test]
    async fn writes_drop_the_snapshot() {
        let store = seeded().await;
        store.get_document("profile", "main").await.unwrap();

        store
            .set_document(
                "profile",
                "main",
                write(&[("firstName", json!("Grace"))]),
                SetMode::Merge,
            )
            .await
            .unwrap();
        store.inner().set_offline(true);

        let result = store.get_document("profile", "main").await;
        assert!(matches!(result, Err(DocumentStoreError::Network(_))));
    }

    #[tokio::test]
    async fn list_snapshot_served_when_offline() {
        let store = SnapshotFallbackStore::new(InMemoryDocumentStore::new());
        store
            .add_document(
                "projects",
                write(&[("createdAt", json!("2026-01-01T00:00:00.000000Z"))]),
            )
            .await
            .unwrap();

        let online = store
            .list_documents("projects", "createdAt", Direction::Descending)
            .await
            .unwrap();
        store.inner().set_offline(true);
        let offline = store
            .list_documents("projects", "createdAt", Direction::Descending)
            .await
            .unwrap();

        assert_eq!(online, offline);
    }

    #[tokio::test]
    async fn non_network_errors_are_not_masked() {
        let store = seeded().await;
        store.get_document("profile", "main").await.unwrap();

        let result = store
            .update_document("profile", "absent", write(&[("x", json!(1))]))
            .await;

        assert_eq!(result, Err(DocumentStoreError::NotFound));
    }
}
