use crate::config::{env_or, ConfigError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("File name cannot be empty")]
    EmptyFileName,

    #[error("File name must not exceed {0} characters")]
    FileNameTooLong(usize),

    #[error("File is empty")]
    EmptyFile,

    #[error("File exceeds {0} bytes")]
    TooLarge(u64),

    #[error("Unsupported content type: {0}")]
    UnsupportedType(String),
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_BYTES,
            max_file_name_len: 255,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }
}

impl UploadPolicy {
    pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] = &[
        "image/jpeg",
        "image/png",
        "image/webp",
        "image/gif",
        "application/pdf",
    ];

    /// Reads `UPLOAD_MAX_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            max_file_size_bytes: env_or("UPLOAD_MAX_BYTES", Self::DEFAULT_MAX_BYTES)?,
            ..Self::default()
        })
    }

    /// Content types are compared without parameters (`; charset=..`).
    pub fn check(
        &self,
        file_name: &str,
        content_type: &str,
        size_bytes: u64,
    ) -> Result<(), UploadPolicyError> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(UploadPolicyError::EmptyFileName);
        }
        if file_name.chars().count() > self.max_file_name_len {
            return Err(UploadPolicyError::FileNameTooLong(self.max_file_name_len));
        }

        if size_bytes == 0 {
            return Err(UploadPolicyError::EmptyFile);
        }
        if size_bytes > self.max_file_size_bytes {
            return Err(UploadPolicyError::TooLarge(self.max_file_size_bytes));
        }

        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if !self.allowed_mime_types.contains(&essence.as_str()) {
            return Err(UploadPolicyError::UnsupportedType(content_type.to_string()));
        }

        Ok(())
    }
}
