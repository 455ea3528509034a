mod content_repository;
mod query_cache;

pub use content_repository::{CollectionRepository, ContentRepositoryError, SingletonRepository};
pub use query_cache::{CacheFetch, NoopQueryCache, QueryCache};
