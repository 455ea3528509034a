mod upload_blob;

pub use upload_blob::upload_blob_handler;
