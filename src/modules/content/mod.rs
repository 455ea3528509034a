pub mod adapter;
pub mod application;

use std::sync::Arc;

use crate::modules::document_store::application::ports::outgoing::DocumentStore;
use adapter::outgoing::{DocumentCollectionRepository, DocumentSingletonRepository, IntoWriteFields};
use application::domain::kinds::{CollectionKind, SingletonKind};
use application::ports::incoming::use_cases::{CollectionContentUseCases, SingletonContentUseCases};
use application::ports::outgoing::QueryCache;
use application::services::{CollectionContentService, SingletonContentService};
use application::ContentUseCases;

/// Wires every content kind onto one document store and one query cache.
pub fn build_use_cases(store: Arc<dyn DocumentStore>, cache: Arc<dyn QueryCache>) -> ContentUseCases {
    ContentUseCases {
        profile: singleton(&store, &cache),
        profile_picture: singleton(&store, &cache),
        biography: singleton(&store, &cache),
        resume: singleton(&store, &cache),
        projects: collection(&store, &cache),
        skills: collection(&store, &cache),
    }
}

fn singleton<K>(
    store: &Arc<dyn DocumentStore>,
    cache: &Arc<dyn QueryCache>,
) -> Arc<dyn SingletonContentUseCases<K> + Send + Sync>
where
    K: SingletonKind,
    K::Fields: IntoWriteFields,
    K::Patch: IntoWriteFields,
{
    let repository = DocumentSingletonRepository::<K>::new(Arc::clone(store));
    Arc::new(SingletonContentService::new(repository, Arc::clone(cache)))
}

fn collection<K>(
    store: &Arc<dyn DocumentStore>,
    cache: &Arc<dyn QueryCache>,
) -> Arc<dyn CollectionContentUseCases<K> + Send + Sync>
where
    K: CollectionKind,
    K::NewRecord: IntoWriteFields,
    K::Patch: IntoWriteFields,
{
    let repository = DocumentCollectionRepository::<K>::new(Arc::clone(store));
    Arc::new(CollectionContentService::new(repository, Arc::clone(cache)))
}
