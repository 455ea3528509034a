use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Where an uploaded file is filed on the asset host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFolder {
    Projects,
    ProfilePicture,
    Resume,
}

impl UploadFolder {
    /// Path segment used by the upload endpoint.
    pub fn slug(self) -> &'static str {
        match self {
            UploadFolder::Projects => "projects",
            UploadFolder::ProfilePicture => "profile",
            UploadFolder::Resume => "resume",
        }
    }

    /// Folder name on the asset host.
    pub fn remote_name(self) -> &'static str {
        match self {
            UploadFolder::Projects => "projects",
            UploadFolder::ProfilePicture => "ProfilePicture",
            UploadFolder::Resume => "resume",
        }
    }
}

impl FromStr for UploadFolder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            UploadFolder::Projects,
            UploadFolder::ProfilePicture,
            UploadFolder::Resume,
        ]
        .into_iter()
        .find(|f| f.slug() == s)
        .ok_or_else(|| format!("unknown upload folder `{s}`"))
    }
}

impl fmt::Display for UploadFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub folder: UploadFolder,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedBlob {
    pub url: String,
    pub file_name: String,
}
