mod collection_content;
mod content_error;
mod singleton_content;

pub use collection_content::CollectionContentUseCases;
pub use content_error::ContentError;
pub use singleton_content::SingletonContentUseCases;
