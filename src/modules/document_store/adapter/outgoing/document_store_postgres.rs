use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, sqlx, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, RuntimeErr, TransactionTrait,
};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::modules::document_store::adapter::outgoing::sea_orm_entity::{
    self as documents, ActiveModel, Column, Entity,
};
use crate::modules::document_store::application::field_merge::{
    apply_write, order_documents, validate_field_name,
};
use crate::modules::document_store::application::ports::outgoing::{
    Direction, Document, DocumentFields, DocumentStore, DocumentStoreError, SetMode, WriteFields,
};
use crate::modules::document_store::application::server_clock::{format_timestamp, ServerClock};

// ============================================================================
// Store Implementation
// ============================================================================

/// Documents kept as JSONB rows keyed by `(collection, id)`.
///
/// Every read-modify-write runs inside one transaction.
pub struct PostgresDocumentStore {
    db: Arc<DatabaseConnection>,
    clock: ServerClock,
}

impl PostgresDocumentStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            clock: ServerClock::new(),
        }
    }

    async fn set_once(
        &self,
        collection: &str,
        id: &str,
        fields: WriteFields,
        mode: SetMode,
    ) -> Result<(), DocumentStoreError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = find_row(&txn, collection, id)
            .await?
            .map(|model| model.to_document())
            .transpose()?;

        let at = self.clock.instant();
        let now = format_timestamp(&at);
        match existing {
            Some(current) => {
                let merged = apply_write(Some(&current.fields), fields, mode, &now);
                update_row(&txn, collection, id, merged, at).await?;
            }
            None => {
                let merged = apply_write(None, fields, mode, &now);
                insert_row(&txn, collection, id, merged, at).await?;
            }
        }

        txn.commit().await.map_err(map_db_err)
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let row = find_row(&*self.db, collection, id).await?;
        row.map(|model| model.to_document()).transpose()
    }

    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: WriteFields,
        mode: SetMode,
    ) -> Result<(), DocumentStoreError> {
        // A concurrent first write can insert the row between our read and
        // insert. The second attempt then sees it and updates instead.
        match self.set_once(collection, id, fields.clone(), mode).await {
            Err(DocumentStoreError::AlreadyExists) => {
                debug!(collection, id, "row inserted concurrently, retrying set");
                self.set_once(collection, id, fields, mode).await?;
            }
            other => other?,
        }

        debug!(collection, id, ?mode, "document set");
        Ok(())
    }

    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        fields: WriteFields,
    ) -> Result<(), DocumentStoreError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if find_row(&txn, collection, id).await?.is_some() {
            return Err(DocumentStoreError::AlreadyExists);
        }

        let at = self.clock.instant();
        let created = apply_write(None, fields, SetMode::Replace, &format_timestamp(&at));
        insert_row(&txn, collection, id, created, at).await?;

        txn.commit().await.map_err(map_db_err)?;
        debug!(collection, id, "document created");
        Ok(())
    }

    async fn add_document(
        &self,
        collection: &str,
        fields: WriteFields,
    ) -> Result<String, DocumentStoreError> {
        let id = Uuid::new_v4().simple().to_string();
        let at = self.clock.instant();
        let created = apply_write(None, fields, SetMode::Replace, &format_timestamp(&at));

        insert_row(&*self.db, collection, &id, created, at).await?;

        debug!(collection, id = %id, "document added");
        Ok(id)
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: WriteFields,
    ) -> Result<(), DocumentStoreError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let current = find_row(&txn, collection, id)
            .await?
            .ok_or(DocumentStoreError::NotFound)?
            .to_document()?;

        let at = self.clock.instant();
        let merged = apply_write(
            Some(&current.fields),
            fields,
            SetMode::Merge,
            &format_timestamp(&at),
        );
        update_row(&txn, collection, id, merged, at).await?;

        txn.commit().await.map_err(map_db_err)?;
        debug!(collection, id, "document updated");
        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError> {
        let result = Entity::delete_many()
            .filter(Column::Collection.eq(collection))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        debug!(collection, id, rows = result.rows_affected, "document deleted");
        Ok(())
    }

    async fn list_documents(
        &self,
        collection: &str,
        order_by: &str,
        direction: Direction,
    ) -> Result<Vec<Document>, DocumentStoreError> {
        validate_field_name(order_by)?;

        let rows = Entity::find()
            .filter(Column::Collection.eq(collection))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let documents = rows
            .iter()
            .map(documents::Model::to_document)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(order_documents(documents, order_by, direction))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn find_row<C: ConnectionTrait>(
    conn: &C,
    collection: &str,
    id: &str,
) -> Result<Option<documents::Model>, DocumentStoreError> {
    Entity::find_by_id((collection.to_string(), id.to_string()))
        .one(conn)
        .await
        .map_err(map_db_err)
}

async fn insert_row<C: ConnectionTrait>(
    conn: &C,
    collection: &str,
    id: &str,
    fields: DocumentFields,
    at: DateTime<Utc>,
) -> Result<(), DocumentStoreError> {
    let now = at.fixed_offset();

    let model = ActiveModel {
        collection: Set(collection.to_string()),
        id: Set(id.to_string()),
        data: Set(Value::Object(fields)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Entity::insert(model)
        .exec_without_returning(conn)
        .await
        .map_err(map_db_err)?;

    Ok(())
}

async fn update_row<C: ConnectionTrait>(
    conn: &C,
    collection: &str,
    id: &str,
    fields: DocumentFields,
    at: DateTime<Utc>,
) -> Result<(), DocumentStoreError> {
    Entity::update_many()
        .col_expr(Column::Data, Expr::value(Value::Object(fields)))
        .col_expr(Column::UpdatedAt, Expr::value(at.fixed_offset()))
        .filter(Column::Collection.eq(collection))
        .filter(Column::Id.eq(id))
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    Ok(())
}

fn map_db_err(e: DbErr) -> DocumentStoreError {
    let sqlx_err = match &e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            return DocumentStoreError::Network(e.to_string())
        }
        DbErr::Exec(RuntimeErr::SqlxError(inner)) | DbErr::Query(RuntimeErr::SqlxError(inner)) => {
            inner
        }
        _ => return DocumentStoreError::Database(e.to_string()),
    };

    match sqlx_err {
        sqlx::Error::Database(db) if db.is_unique_violation() => DocumentStoreError::AlreadyExists,
        // The connection dropped or the pool gave up mid-statement.
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => DocumentStoreError::Network(e.to_string()),
        _ => DocumentStoreError::Database(e.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::document_store::application::ports::outgoing::FieldValue;
    use sea_orm::sqlx::error::{DatabaseError, ErrorKind};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    #[derive(Debug)]
    struct DuplicateKey;

    impl std::fmt::Display for DuplicateKey {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.message())
        }
    }

    impl std::error::Error for DuplicateKey {}

    impl DatabaseError for DuplicateKey {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint \"documents_pkey\""
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }
    }

    fn duplicate_key() -> DbErr {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(Box::new(
            DuplicateKey,
        ))))
    }

    fn row(collection: &str, id: &str, data: serde_json::Value) -> documents::Model {
        let now = Utc::now().fixed_offset();
        documents::Model {
            collection: collection.to_string(),
            id: id.to_string(),
            data,
            created_at: now,
            updated_at: now,
        }
    }

    fn exec_ok() -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }
    }

    fn write(pairs: &[(&str, serde_json::Value)]) -> WriteFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), FieldValue::Set(v.clone())))
            .collect()
    }

    // ========================================================================
    // get_document Tests
    // ========================================================================

    #[tokio::test]
    async fn test_get_document_returns_fields() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(
                "profile",
                "main",
                json!({ "firstName": "Ada" }),
            )]])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));
        let doc = store.get_document("profile", "main").await.unwrap().unwrap();

        assert_eq!(doc.id, "main");
        assert_eq!(doc.fields["firstName"], "Ada");
    }

    #[tokio::test]
    async fn test_get_document_absent_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<documents::Model>::new()])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));

        assert_eq!(store.get_document("about", "main").await, Ok(None));
    }

    #[tokio::test]
    async fn test_get_document_connection_error_is_network() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
                "connection refused".to_string(),
            ))])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));
        let result = store.get_document("profile", "main").await;

        assert!(matches!(result, Err(DocumentStoreError::Network(_))));
    }

    #[tokio::test]
    async fn test_get_document_non_object_payload_is_serialization_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("profile", "main", json!([1, 2]))]])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));
        let result = store.get_document("profile", "main").await;

        assert!(matches!(result, Err(DocumentStoreError::Serialization(_))));
    }

    // ========================================================================
    // create_document Tests
    // ========================================================================

    #[tokio::test]
    async fn test_create_document_inserts_when_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<documents::Model>::new()])
            .append_exec_results([exec_ok()])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));
        let result = store
            .create_document("about", "main", write(&[("biography", json!("Hi"))]))
            .await;

        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_create_document_rejects_existing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("about", "main", json!({ "biography": "Old" }))]])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));
        let result = store
            .create_document("about", "main", write(&[("biography", json!("New"))]))
            .await;

        assert_eq!(result, Err(DocumentStoreError::AlreadyExists));
    }

    // ========================================================================
    // update / set / add / delete Tests
    // ========================================================================

    #[tokio::test]
    async fn test_update_document_absent_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<documents::Model>::new()])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));
        let result = store
            .update_document("skills", "missing", write(&[("proficiency", json!(90))]))
            .await;

        assert_eq!(result, Err(DocumentStoreError::NotFound));
    }

    #[tokio::test]
    async fn test_update_document_existing_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(
                "skills",
                "abc",
                json!({ "name": "React", "proficiency": 75 }),
            )]])
            .append_exec_results([exec_ok()])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));
        let result = store
            .update_document("skills", "abc", write(&[("proficiency", json!(90))]))
            .await;

        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_set_document_merge_updates_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("profile", "main", json!({ "firstName": "Ada" }))]])
            .append_exec_results([exec_ok()])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));
        let result = store
            .set_document(
                "profile",
                "main",
                write(&[("lastName", json!("Lovelace"))]),
                SetMode::Merge,
            )
            .await;

        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_set_document_retries_as_update_when_insert_races() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                Vec::<documents::Model>::new(),
                vec![row("profile", "main", json!({ "firstName": "Ada" }))],
            ])
            .append_exec_errors([duplicate_key()])
            .append_exec_results([exec_ok()])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));
        let result = store
            .set_document(
                "profile",
                "main",
                write(&[("lastName", json!("Lovelace"))]),
                SetMode::Merge,
            )
            .await;

        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_create_document_duplicate_insert_is_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<documents::Model>::new()])
            .append_exec_errors([duplicate_key()])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));
        let result = store
            .create_document("about", "main", write(&[("biography", json!("Hi"))]))
            .await;

        assert_eq!(result, Err(DocumentStoreError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_insert_columns_share_the_document_timestamp() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_ok()])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));
        let mut fields = write(&[("title", json!("Site"))]);
        fields.insert("createdAt".to_string(), FieldValue::ServerTimestamp);
        store.add_document("projects", fields).await.unwrap();

        let db = Arc::try_unwrap(store.db).unwrap();
        let log = db.into_transaction_log();
        let values = log[0].statements()[0].values.clone().unwrap().0;

        let column = values
            .iter()
            .find_map(|v| match v {
                sea_orm::Value::ChronoDateTimeWithTimeZone(Some(at)) => Some(**at),
                _ => None,
            })
            .unwrap();
        let data = values
            .iter()
            .find_map(|v| match v {
                sea_orm::Value::Json(Some(data)) => Some((**data).clone()),
                _ => None,
            })
            .unwrap();

        let stamped = chrono::DateTime::parse_from_rfc3339(data["createdAt"].as_str().unwrap())
            .unwrap();
        assert_eq!(stamped, column);
    }

    #[tokio::test]
    async fn test_add_document_returns_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_ok()])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));
        let id = store
            .add_document("projects", write(&[("title", json!("Site"))]))
            .await
            .unwrap();

        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_delete_document_absent_is_noop() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));

        assert_eq!(store.delete_document("projects", "gone").await, Ok(()));
    }

    // ========================================================================
    // list_documents Tests
    // ========================================================================

    #[tokio::test]
    async fn test_list_documents_newest_first() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row("projects", "old", json!({ "createdAt": "2026-01-01T00:00:00.000000Z" })),
                row("projects", "new", json!({ "createdAt": "2026-05-01T00:00:00.000000Z" })),
            ]])
            .into_connection();

        let store = PostgresDocumentStore::new(Arc::new(db));
        let docs = store
            .list_documents("projects", "createdAt", Direction::Descending)
            .await
            .unwrap();

        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[tokio::test]
    async fn test_list_documents_rejects_unsafe_field() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let store = PostgresDocumentStore::new(Arc::new(db));

        let result = store
            .list_documents("projects", "created at", Direction::Descending)
            .await;

        assert!(matches!(result, Err(DocumentStoreError::InvalidField(_))));
    }

    #[test]
    fn test_map_db_err_defaults_to_database() {
        let err = map_db_err(DbErr::Custom("boom".to_string()));
        assert!(matches!(err, DocumentStoreError::Database(_)));
    }

    #[test]
    fn test_map_db_err_dropped_connection_is_network() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        let cases = [
            DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Io(io))),
            DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::PoolClosed)),
            DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::PoolTimedOut)),
        ];

        for case in cases {
            assert!(matches!(map_db_err(case), DocumentStoreError::Network(_)));
        }
    }

    #[test]
    fn test_map_db_err_unique_violation_is_already_exists() {
        assert_eq!(map_db_err(duplicate_key()), DocumentStoreError::AlreadyExists);
    }

    #[test]
    fn test_map_db_err_other_sqlx_error_is_database() {
        let err = map_db_err(DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::RowNotFound)));
        assert!(matches!(err, DocumentStoreError::Database(_)));
    }
}
