use async_trait::async_trait;

use super::ContentError;
use crate::modules::content::application::domain::kinds::CollectionKind;

#[async_trait]
pub trait CollectionContentUseCases<K: CollectionKind>: Send + Sync {
    /// Cached, newest first.
    async fn list(&self) -> Result<Vec<K::Record>, ContentError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<K::Record>, ContentError>;

    async fn create(&self, new_record: K::NewRecord) -> Result<K::Record, ContentError>;

    async fn update(&self, id: &str, patch: K::Patch) -> Result<K::Record, ContentError>;

    async fn delete(&self, id: &str) -> Result<(), ContentError>;
}
