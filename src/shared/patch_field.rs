// src/shared/patch_field.rs

use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => remove the field (only for optional fields)
// - Value(v): replace with v
//
// Serde behavior (recommended usage):
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[default]
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Validates or converts the carried value, keeping Unset/Null as they are.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<PatchField<U>, E> {
        match self {
            PatchField::Unset => Ok(PatchField::Unset),
            PatchField::Null => Ok(PatchField::Null),
            PatchField::Value(v) => f(v).map(PatchField::Value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        title: PatchField<String>,
        #[serde(default)]
        live_url: PatchField<String>,
    }

    #[test]
    fn omitted_null_and_value_are_distinguished() {
        let body: Body = serde_json::from_str(r#"{ "live_url": null }"#).unwrap();
        assert!(body.title.is_unset());
        assert_eq!(body.live_url, PatchField::Null);

        let body: Body = serde_json::from_str(r#"{ "title": "New" }"#).unwrap();
        assert_eq!(body.title.as_value().map(String::as_str), Some("New"));
    }

    #[test]
    fn try_map_only_touches_values() {
        let doubled: Result<PatchField<i32>, ()> = PatchField::Value(2).try_map(|v| Ok(v * 2));
        assert_eq!(doubled, Ok(PatchField::Value(4)));

        let null: Result<PatchField<i32>, &str> =
            PatchField::<i32>::Null.try_map(|_| Err("not called"));
        assert_eq!(null, Ok(PatchField::Null));

        let failed: Result<PatchField<i32>, &str> = PatchField::Value(1).try_map(|_| Err("bad"));
        assert_eq!(failed, Err("bad"));
    }
}
