use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::modules::content::application::domain::kinds::SingletonKind;
use crate::modules::content::application::ports::incoming::use_cases::{
    ContentError, SingletonContentUseCases,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepositoryError, QueryCache, SingletonRepository,
};

use super::cache_codec::{decode, encode};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct SingletonContentService<K, R>
where
    K: SingletonKind,
    R: SingletonRepository<K>,
{
    repository: R,
    cache: Arc<dyn QueryCache>,
    _kind: PhantomData<fn() -> K>,
}

impl<K, R> SingletonContentService<K, R>
where
    K: SingletonKind,
    R: SingletonRepository<K>,
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
            ContentRepositoryError::NotFound | ContentRepositoryError::AlreadyExists => {
                warn!(kind = K::NAME, operation, error = %e, "content write rejected");
            }
            _ => {
                error!(kind = K::NAME, operation, error = %e, "content store call failed");
            }
        }
        ContentError::from_repository(K::NAME, e)
    }

    async fn after_write(
        &self,
        operation: &'static str,
        result: Result<K::Record, ContentRepositoryError>,
    ) -> Result<K::Record, ContentError> {
        self.cache.invalidate(K::CACHE_KEY).await;

        match result {
            Ok(record) => {
                info!(kind = K::NAME, operation, "content saved");
                Ok(record)
            }
            Err(e) => Err(self.fail(operation, e)),
        }
    }
}

#[async_trait]
impl<K, R> SingletonContentUseCases<K> for SingletonContentService<K, R>
where
    K: SingletonKind,
    R: SingletonRepository<K>,
{
    async fn get(&self) -> Result<Option<K::Record>, ContentError> {
        let fetch = async {
            let record = self
                .repository
                .get()
                .await
                .map_err(|e| self.fail("get", e))?;
            encode(&record)
        };

        let value = self.cache.load(K::CACHE_KEY, Box::pin(fetch)).await?;
        decode(value)
    }

    async fn create(&self, fields: K::Fields) -> Result<K::Record, ContentError> {
        let result = self.repository.create(fields).await;
        self.after_write("create", result).await
    }

    async fn update(&self, patch: K::Patch) -> Result<K::Record, ContentError> {
        let result = self.repository.update(patch).await;
        self.after_write("update", result).await
    }

    async fn upsert(&self, fields: K::Fields) -> Result<K::Record, ContentError> {
        let result = self.repository.upsert(fields).await;
        self.after_write("upsert", result).await
    }
}
