pub mod auth;
pub mod content;
pub mod document_store;
pub mod multimedia;
