use serde_json::Value;

use crate::modules::content::application::domain::{
    BiographyFields, BiographyPatch, NewProject, NewSkill, Proficiency, ProfileFields,
    ProfilePatch, ProfilePictureFields, ProjectPatch, ResumeFields, SkillCategory, SkillPatch,
};
use crate::modules::document_store::application::ports::outgoing::{FieldValue, WriteFields};
use crate::shared::PatchField;

/// Document fields written for a validated input, keyed by stored name.
///
/// Full field sets write `Delete` for absent optional fields so an upsert
/// clears them. Patches only touch what they carry.
pub trait IntoWriteFields {
    fn write_fields(&self) -> WriteFields;
}

impl From<Proficiency> for Value {
    fn from(value: Proficiency) -> Self {
        Value::from(value.value())
    }
}

impl From<SkillCategory> for Value {
    fn from(value: SkillCategory) -> Self {
        Value::from(value.label())
    }
}

#[derive(Default)]
struct Fields(WriteFields);

impl Fields {
    fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), FieldValue::Set(value.into()));
        self
    }

    fn optional(mut self, name: &str, value: Option<&str>) -> Self {
        let field = match value {
            Some(v) => FieldValue::set(v),
            None => FieldValue::Delete,
        };
        self.0.insert(name.to_string(), field);
        self
    }

    fn patch<T>(mut self, name: &str, value: &PatchField<T>) -> Self
    where
        T: Clone + Into<Value>,
    {
        match value {
            PatchField::Unset => {}
            PatchField::Null => {
                self.0.insert(name.to_string(), FieldValue::Delete);
            }
            PatchField::Value(v) => {
                self.0
                    .insert(name.to_string(), FieldValue::Set(v.clone().into()));
            }
        }
        self
    }

    fn done(self) -> WriteFields {
        self.0
    }
}

// ------------------------
// Singletons
// ------------------------

impl IntoWriteFields for ProfileFields {
    fn write_fields(&self) -> WriteFields {
        Fields::default()
            .set("firstName", self.first_name())
            .set("lastName", self.last_name())
            .set("email", self.email())
            .optional("phone", self.phone())
            .set("role", self.role())
            .optional("userName", self.user_name())
            .done()
    }
}

impl IntoWriteFields for ProfilePatch {
    fn write_fields(&self) -> WriteFields {
        Fields::default()
            .patch("firstName", self.first_name())
            .patch("lastName", self.last_name())
            .patch("email", self.email())
            .patch("phone", self.phone())
            .patch("role", self.role())
            .patch("userName", self.user_name())
            .done()
    }
}

impl IntoWriteFields for ProfilePictureFields {
    fn write_fields(&self) -> WriteFields {
        Fields::default().set("url", self.url()).done()
    }
}

impl IntoWriteFields for BiographyFields {
    fn write_fields(&self) -> WriteFields {
        Fields::default()
            .set("biography", self.biography())
            .set("intro", self.intro())
            .done()
    }
}

impl IntoWriteFields for BiographyPatch {
    fn write_fields(&self) -> WriteFields {
        Fields::default()
            .patch("biography", self.biography())
            .patch("intro", self.intro())
            .done()
    }
}

impl IntoWriteFields for ResumeFields {
    fn write_fields(&self) -> WriteFields {
        Fields::default()
            .set("resume", self.resume())
            .set("fileName", self.file_name())
            .done()
    }
}

// ------------------------
// Collections
// ------------------------

impl IntoWriteFields for NewProject {
    fn write_fields(&self) -> WriteFields {
        Fields::default()
            .set("title", self.title())
            .set("description", self.description())
            .set("technologies", self.technologies().to_vec())
            .optional("githubUrl", self.github_url())
            .optional("liveUrl", self.live_url())
            .optional("image", self.image())
            .set("isCompleted", self.is_completed())
            .done()
    }
}

impl IntoWriteFields for ProjectPatch {
    fn write_fields(&self) -> WriteFields {
        Fields::default()
            .patch("title", self.title())
            .patch("description", self.description())
            .patch("technologies", self.technologies())
            .patch("githubUrl", self.github_url())
            .patch("liveUrl", self.live_url())
            .patch("image", self.image())
            .patch("isCompleted", self.is_completed())
            .done()
    }
}

impl IntoWriteFields for NewSkill {
    fn write_fields(&self) -> WriteFields {
        Fields::default()
            .set("name", self.name())
            .set("category", self.category())
            .set("proficiency", self.proficiency())
            .optional("icon", self.icon())
            .done()
    }
}

impl IntoWriteFields for SkillPatch {
    fn write_fields(&self) -> WriteFields {
        Fields::default()
            .patch("name", self.name())
            .patch("category", self.category())
            .patch("proficiency", self.proficiency())
            .patch("icon", self.icon())
            .done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_fields_delete_missing_optionals() {
        let fields = ProfileFields::new(
            "Ada".into(),
            "Lovelace".into(),
            "ada@example.com".into(),
            None,
            None,
            Some("ada".into()),
        )
        .unwrap()
        .write_fields();

        assert_eq!(fields["firstName"], FieldValue::Set(json!("Ada")));
        assert_eq!(fields["phone"], FieldValue::Delete);
        assert_eq!(fields["role"], FieldValue::Set(json!("Admin")));
        assert_eq!(fields["userName"], FieldValue::Set(json!("ada")));
    }

    #[test]
    fn patch_only_touches_provided_fields() {
        let patch = ProjectPatch::new(
            PatchField::Value("New title".into()),
            PatchField::Unset,
            PatchField::Unset,
            PatchField::Null,
            PatchField::Unset,
            PatchField::Unset,
            PatchField::Value(true),
        )
        .unwrap();

        let fields = patch.write_fields();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields["title"], FieldValue::Set(json!("New title")));
        assert_eq!(fields["githubUrl"], FieldValue::Delete);
        assert_eq!(fields["isCompleted"], FieldValue::Set(json!(true)));
    }

    #[test]
    fn skill_fields_store_label_and_number() {
        let fields = NewSkill::new("React".into(), "Frontend Development", 75, None)
            .unwrap()
            .write_fields();

        assert_eq!(fields["category"], FieldValue::Set(json!("Frontend Development")));
        assert_eq!(fields["proficiency"], FieldValue::Set(json!(75)));
        assert_eq!(fields["icon"], FieldValue::Delete);
    }
}
