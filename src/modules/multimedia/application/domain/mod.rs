mod upload;
mod upload_policy;

pub use upload::{UploadFolder, UploadRequest, UploadedBlob};
pub use upload_policy::{UploadPolicy, UploadPolicyError};
