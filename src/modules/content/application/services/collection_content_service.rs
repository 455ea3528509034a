use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::modules::content::application::domain::kinds::CollectionKind;
use crate::modules::content::application::ports::incoming::use_cases::{
    CollectionContentUseCases, ContentError,
};
use crate::modules::content::application::ports::outgoing::{
    CollectionRepository, ContentRepositoryError, QueryCache,
};

use super::cache_codec::{decode, encode};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CollectionContentService<K, R>
where
    K: CollectionKind,
    R: CollectionRepository<K>,
{
    repository: R,
    cache: Arc<dyn QueryCache>,
    _kind: PhantomData<fn() -> K>,
}

impl<K, R> CollectionContentService<K, R>
where
    K: CollectionKind,
    R: CollectionRepository<K>,
{
    pub fn new(repository: R, cache: Arc<dyn QueryCache>) -> Self {
        Self {
            repository,
            cache,
            _kind: PhantomData,
        }
    }

    fn fail(&self, operation: &'static str, e: ContentRepositoryError) -> ContentError {
        match e {
            ContentRepositoryError::NotFound => {
                warn!(kind = K::NAME, operation, "record not found");
            }
            _ => {
                error!(kind = K::NAME, operation, error = %e, "content store call failed");
            }
        }
        ContentError::from_repository(K::NAME, e)
    }
}

#[async_trait]
impl<K, R> CollectionContentUseCases<K> for CollectionContentService<K, R>
where
    K: CollectionKind,
    R: CollectionRepository<K>,
{
    async fn list(&self) -> Result<Vec<K::Record>, ContentError> {
        let fetch = async {
            let records = self
                .repository
                .list()
                .await
                .map_err(|e| self.fail("list", e))?;
            encode(&records)
        };

        let value = self.cache.load(K::CACHE_KEY, Box::pin(fetch)).await?;
        decode(value)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<K::Record>, ContentError> {
        self.repository
            .get_by_id(id)
            .await
            .map_err(|e| self.fail("get_by_id", e))
    }

    async fn create(&self, new_record: K::NewRecord) -> Result<K::Record, ContentError> {
        let result = self.repository.create(new_record).await;
        self.cache.invalidate(K::CACHE_KEY).await;

        let record = result.map_err(|e| self.fail("create", e))?;
        info!(kind = K::NAME, "record created");
        Ok(record)
    }

    async fn update(&self, id: &str, patch: K::Patch) -> Result<K::Record, ContentError> {
        let result = self.repository.update(id, patch).await;
        self.cache.invalidate(K::CACHE_KEY).await;

        let record = result.map_err(|e| self.fail("update", e))?;
        info!(kind = K::NAME, id, "record updated");
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<(), ContentError> {
        let result = self.repository.delete(id).await;
        self.cache.invalidate(K::CACHE_KEY).await;

        result.map_err(|e| self.fail("delete", e))?;
        info!(kind = K::NAME, id, "record deleted");
        Ok(())
    }
}
