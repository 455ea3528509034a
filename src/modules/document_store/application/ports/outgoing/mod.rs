mod document_store;

pub use document_store::{
    Direction, Document, DocumentFields, DocumentStore, DocumentStoreError, FieldValue, SetMode,
    WriteFields,
};
