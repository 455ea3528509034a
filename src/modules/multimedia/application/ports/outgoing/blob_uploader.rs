use async_trait::async_trait;

use crate::modules::multimedia::application::domain::{UploadRequest, UploadedBlob};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Invalid upload request: {0}")]
    InvalidRequest(String),

    #[error("Upload host unreachable: {0}")]
    Network(String),

    /// The host answered with a non-success status.
    #[error("Upload rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected upload response: {0}")]
    InvalidResponse(String),
}

/// Stores a file with an asset host and returns its public URL.
///
/// No retries; a failed upload is reported once.
#[async_trait]
pub trait BlobUploader: Send + Sync {
    async fn upload(&self, request: UploadRequest) -> Result<UploadedBlob, UploadError>;
}
