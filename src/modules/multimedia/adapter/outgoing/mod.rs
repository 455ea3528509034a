mod cloudinary_uploader;

pub use cloudinary_uploader::{CloudinaryConfig, CloudinaryUploader};
