use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::modules::content::application::ports::incoming::use_cases::ContentError;

// Cached entries are plain JSON so one cache serves every kind.

pub(super) fn encode<T: Serialize>(value: &T) -> Result<Value, ContentError> {
    serde_json::to_value(value).map_err(|e| ContentError::Repository(e.to_string()))
}

pub(super) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ContentError> {
    serde_json::from_value(value).map_err(|e| ContentError::Repository(e.to_string()))
}
