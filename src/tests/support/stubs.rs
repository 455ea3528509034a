use async_trait::async_trait;

use crate::modules::auth::application::domain::LoginCommand;
use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginAdminUseCase, LoginError, LoginResult,
};
use crate::modules::multimedia::application::domain::{UploadRequest, UploadedBlob};
use crate::modules::multimedia::application::ports::outgoing::{BlobUploader, UploadError};

/// Rejects every login.
pub struct StubLoginAdminUseCase;

#[async_trait]
impl LoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginResult, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

/// Echoes the request back as if the blob host had stored it.
pub struct StubBlobUploader;

#[async_trait]
impl BlobUploader for StubBlobUploader {
    async fn upload(&self, request: UploadRequest) -> Result<UploadedBlob, UploadError> {
        Ok(UploadedBlob {
            url: format!(
                "https://blobs.test/{}/{}",
                request.folder.remote_name(),
                request.file_name
            ),
            file_name: request.file_name,
        })
    }
}
