mod document_collection_repository;
mod document_singleton_repository;
mod moka_query_cache;
mod record_codec;
mod write_fields;

pub use document_collection_repository::DocumentCollectionRepository;
pub use document_singleton_repository::DocumentSingletonRepository;
pub use moka_query_cache::{MokaQueryCache, QueryCacheConfig};
pub use write_fields::IntoWriteFields;
