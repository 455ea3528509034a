use async_trait::async_trait;
use futures::future::BoxFuture;
use serde_json::Value;

use crate::modules::content::application::domain::kinds::CacheKey;
use crate::modules::content::application::ports::incoming::use_cases::ContentError;

pub type CacheFetch<'a> = BoxFuture<'a, Result<Value, ContentError>>;

/// Read-through cache in front of content reads.
///
/// Concurrent `load` calls for one key share a single `fetch`. Failed
/// fetches are never cached.
#[async_trait]
pub trait QueryCache: Send + Sync {
    async fn load<'a>(&'a self, key: CacheKey, fetch: CacheFetch<'a>)
        -> Result<Value, ContentError>;

    async fn invalidate(&self, key: CacheKey);
}

/// Always fetches. Used where staleness is unwanted, mostly tests.
pub struct NoopQueryCache;

#[async_trait]
impl QueryCache for NoopQueryCache {
    async fn load<'a>(
        &'a self,
        _key: CacheKey,
        fetch: CacheFetch<'a>,
    ) -> Result<Value, ContentError> {
        fetch.await
    }

    async fn invalidate(&self, _key: CacheKey) {}
}
