use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::modules::content::application::ports::outgoing::ContentRepositoryError;
use crate::modules::document_store::application::ports::outgoing::Document;

/// Turns a stored document into its record, carrying the document id as `id`.
pub(super) fn document_into_record<T: DeserializeOwned>(
    document: Document,
) -> Result<T, ContentRepositoryError> {
    let Document { id, mut fields } = document;
    fields.insert("id".to_string(), Value::String(id));

    serde_json::from_value(Value::Object(fields))
        .map_err(|e| ContentRepositoryError::Serialization(e.to_string()))
}
