mod blob_uploader;

pub use blob_uploader::{BlobUploader, UploadError};
