use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

use crate::config::{optional, required, ConfigError};
use crate::modules::multimedia::application::domain::{UploadRequest, UploadedBlob};
use crate::modules::multimedia::application::ports::outgoing::{BlobUploader, UploadError};

const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub upload_preset: String,
    pub api_base: String,
}

impl CloudinaryConfig {
    /// Reads `CLOUDINARY_CLOUD_NAME`, `CLOUDINARY_UPLOAD_PRESET` and the
    /// optional `CLOUDINARY_API_BASE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
            upload_preset: required("CLOUDINARY_UPLOAD_PRESET")?,
            api_base: optional("CLOUDINARY_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        })
    }

    fn upload_endpoint(&self) -> String {
        format!(
            "{}/v1_1/{}/auto/upload",
            self.api_base.trim_end_matches('/'),
            self.cloud_name
        )
    }
}

/// Unsigned uploads through an upload preset.
#[derive(Debug, Clone)]
pub struct CloudinaryUploader {
    client: Client,
    config: CloudinaryConfig,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    #[serde(default)]
    original_filename: Option<String>,
}

impl CloudinaryUploader {
    pub fn new(config: CloudinaryConfig) -> Result<Self, UploadError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| UploadError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn form(&self, request: UploadRequest) -> Result<Form, UploadError> {
        let file = Part::bytes(request.bytes)
            .file_name(request.file_name)
            .mime_str(&request.content_type)
            .map_err(|e| UploadError::InvalidRequest(e.to_string()))?;

        Ok(Form::new()
            .part("file", file)
            .text("upload_preset", self.config.upload_preset.clone())
            .text("folder", request.folder.remote_name()))
    }
}

#[async_trait]
impl BlobUploader for CloudinaryUploader {
    async fn upload(&self, request: UploadRequest) -> Result<UploadedBlob, UploadError> {
        let folder = request.folder;
        let submitted_name = request.file_name.clone();
        let form = self.form(request)?;

        let response = self
            .client
            .post(self.config.upload_endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, %folder, "upload request failed");
                UploadError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %folder, "upload rejected");
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

        info!(%folder, url = %body.secure_url, "file uploaded");

        Ok(UploadedBlob {
            url: body.secure_url,
            file_name: body
                .original_filename
                .filter(|n| !n.is_empty())
                .unwrap_or(submitted_name),
        })
    }
}
