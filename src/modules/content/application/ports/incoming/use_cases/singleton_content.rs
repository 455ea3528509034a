use async_trait::async_trait;

use super::ContentError;
use crate::modules::content::application::domain::kinds::SingletonKind;

#[async_trait]
pub trait SingletonContentUseCases<K: SingletonKind>: Send + Sync {
    /// Cached. `Ok(None)` when the kind was never written.
    async fn get(&self) -> Result<Option<K::Record>, ContentError>;

    async fn create(&self, fields: K::Fields) -> Result<K::Record, ContentError>;

    async fn update(&self, patch: K::Patch) -> Result<K::Record, ContentError>;

    async fn upsert(&self, fields: K::Fields) -> Result<K::Record, ContentError>;
}
