mod cache_codec;
mod collection_content_service;
mod singleton_content_service;

pub use collection_content_service::CollectionContentService;
pub use singleton_content_service::SingletonContentService;
