// src/modules/document_store/application/field_merge.rs

use std::cmp::Ordering;

use serde_json::Value;

use crate::modules::document_store::application::ports::outgoing::{
    Direction, Document, DocumentFields, DocumentStoreError, FieldValue, SetMode, WriteFields,
};

/// Resolves a write against the currently stored fields.
///
/// `now` is the store's own timestamp for this write; callers never provide
/// timestamp values directly.
pub fn apply_write(
    existing: Option<&DocumentFields>,
    fields: WriteFields,
    mode: SetMode,
    now: &str,
) -> DocumentFields {
    let mut merged = match (mode, existing) {
        (SetMode::Merge, Some(current)) => current.clone(),
        _ => DocumentFields::new(),
    };

    for (name, value) in fields {
        match value {
            FieldValue::Set(v) => {
                merged.insert(name, v);
            }
            FieldValue::Delete => {
                merged.remove(&name);
            }
            FieldValue::ServerTimestamp => {
                merged.insert(name, Value::String(now.to_string()));
            }
            FieldValue::ServerTimestampIfAbsent => {
                let stored = existing.and_then(|current| current.get(&name));
                match stored {
                    Some(previous) => {
                        merged.insert(name, previous.clone());
                    }
                    None => {
                        merged.insert(name, Value::String(now.to_string()));
                    }
                }
            }
        }
    }

    merged
}

pub fn validate_field_name(name: &str) -> Result<(), DocumentStoreError> {
    let valid =
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(DocumentStoreError::InvalidField(name.to_string()))
    }
}

/// Sorts documents by one field. Documents without the field are left out,
/// the same way an ordered query skips them.
pub fn order_documents(
    documents: Vec<Document>,
    order_by: &str,
    direction: Direction,
) -> Vec<Document> {
    let mut ordered: Vec<Document> = documents
        .into_iter()
        .filter(|doc| doc.fields.get(order_by).is_some_and(|v| !v.is_null()))
        .collect();

    ordered.sort_by(|a, b| {
        let ord = compare_values(&a.fields[order_by], &b.fields[order_by])
            .then_with(|| a.id.cmp(&b.id));
        match direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });

    ordered
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or_default();
            let y = y.as_f64().unwrap_or_default();
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
