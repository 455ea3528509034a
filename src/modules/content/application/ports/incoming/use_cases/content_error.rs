use crate::modules::content::application::ports::outgoing::ContentRepositoryError;

/// Failure of a content use case. The `&'static str` names the kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0} already exists")]
    AlreadyExists(&'static str),

    #[error("{0} could not be read back after writing")]
    CreationFailed(&'static str),

    /// Store unreachable and no snapshot to serve.
    #[error("Content store unavailable: {0}")]
    Unavailable(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl ContentError {
    pub fn from_repository(kind: &'static str, e: ContentRepositoryError) -> Self {
        match e {
            ContentRepositoryError::NotFound => ContentError::NotFound(kind),
            ContentRepositoryError::AlreadyExists => ContentError::AlreadyExists(kind),
            ContentRepositoryError::CreationFailed => ContentError::CreationFailed(kind),
            ContentRepositoryError::Network(msg) => ContentError::Unavailable(msg),
            ContentRepositoryError::Store(msg) | ContentRepositoryError::Serialization(msg) => {
                ContentError::Repository(msg)
            }
        }
    }
}
