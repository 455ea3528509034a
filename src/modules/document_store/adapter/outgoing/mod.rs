pub mod document_store_memory;
pub mod document_store_postgres;
pub mod sea_orm_entity;
pub mod snapshot_fallback_store;

pub use document_store_memory::InMemoryDocumentStore;
pub use document_store_postgres::PostgresDocumentStore;
pub use snapshot_fallback_store::SnapshotFallbackStore;
