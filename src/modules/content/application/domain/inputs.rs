//! Validated write inputs.
//!
//! Every type here can only be built through `new`, which trims and checks
//! the raw values. JSON bodies go through the same constructors while
//! deserializing, and unknown fields are rejected.

use serde::{Deserialize, Deserializer};

use super::entities::{Proficiency, SkillCategory};
use super::validation::{
    absolute_url, email, optional_text, optional_url, required_text, technologies,
    ValidationError,
};
use crate::shared::PatchField;

const DEFAULT_ROLE: &str = "Admin";

// ------------------------
// Patch helpers
// ------------------------

fn required_patch(
    field: &'static str,
    value: PatchField<String>,
) -> Result<PatchField<String>, ValidationError> {
    match value {
        PatchField::Null => Err(ValidationError::NotNullable(field)),
        other => other.try_map(|v| required_text(field, v)),
    }
}

fn non_null_patch<T>(field: &'static str, value: PatchField<T>) -> Result<PatchField<T>, ValidationError> {
    match value {
        PatchField::Null => Err(ValidationError::NotNullable(field)),
        other => Ok(other),
    }
}

/// A blank value clears an optional field, the same as `null`.
fn optional_patch(value: PatchField<String>) -> PatchField<String> {
    match value {
        PatchField::Value(v) => match optional_text(Some(v)) {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        },
        other => other,
    }
}

fn optional_url_patch(
    field: &'static str,
    value: PatchField<String>,
) -> Result<PatchField<String>, ValidationError> {
    optional_patch(value).try_map(|v| absolute_url(field, v))
}

// ========================= Profile =========================

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFields {
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    role: String,
    user_name: Option<String>,
}

impl ProfileFields {
    pub fn new(
        first_name: String,
        last_name: String,
        email_address: String,
        phone: Option<String>,
        role: Option<String>,
        user_name: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: required_text("firstName", first_name)?,
            last_name: required_text("lastName", last_name)?,
            email: email(email_address)?,
            phone: optional_text(phone),
            role: optional_text(role).unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            user_name: optional_text(user_name),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }
}

impl<'de> Deserialize<'de> for ProfileFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct Helper {
            first_name: String,
            last_name: String,
            email: String,
            #[serde(default)]
            phone: Option<String>,
            #[serde(default)]
            role: Option<String>,
            #[serde(default)]
            user_name: Option<String>,
        }

        let h = Helper::deserialize(deserializer)?;
        ProfileFields::new(
            h.first_name,
            h.last_name,
            h.email,
            h.phone,
            h.role,
            h.user_name,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfilePatch {
    first_name: PatchField<String>,
    last_name: PatchField<String>,
    email: PatchField<String>,
    phone: PatchField<String>,
    role: PatchField<String>,
    user_name: PatchField<String>,
}

impl ProfilePatch {
    pub fn new(
        first_name: PatchField<String>,
        last_name: PatchField<String>,
        email_address: PatchField<String>,
        phone: PatchField<String>,
        role: PatchField<String>,
        user_name: PatchField<String>,
    ) -> Result<Self, ValidationError> {
        let email_address = non_null_patch("email", email_address)?.try_map(email)?;
        let role = match non_null_patch("role", role)? {
            PatchField::Value(v) => PatchField::Value(
                optional_text(Some(v)).unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            ),
            other => other,
        };

        Ok(Self {
            first_name: required_patch("firstName", first_name)?,
            last_name: required_patch("lastName", last_name)?,
            email: email_address,
            phone: optional_patch(phone),
            role,
            user_name: optional_patch(user_name),
        })
    }

    pub fn first_name(&self) -> &PatchField<String> {
        &self.first_name
    }

    pub fn last_name(&self) -> &PatchField<String> {
        &self.last_name
    }

    pub fn email(&self) -> &PatchField<String> {
        &self.email
    }

    pub fn phone(&self) -> &PatchField<String> {
        &self.phone
    }

    pub fn role(&self) -> &PatchField<String> {
        &self.role
    }

    pub fn user_name(&self) -> &PatchField<String> {
        &self.user_name
    }
}

impl<'de> Deserialize<'de> for ProfilePatch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct Helper {
            #[serde(default)]
            first_name: PatchField<String>,
            #[serde(default)]
            last_name: PatchField<String>,
            #[serde(default)]
            email: PatchField<String>,
            #[serde(default)]
            phone: PatchField<String>,
            #[serde(default)]
            role: PatchField<String>,
            #[serde(default)]
            user_name: PatchField<String>,
        }

        let h = Helper::deserialize(deserializer)?;
        ProfilePatch::new(
            h.first_name,
            h.last_name,
            h.email,
            h.phone,
            h.role,
            h.user_name,
        )
        .map_err(serde::de::Error::custom)
    }
}

// ========================= Profile picture =========================

#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePictureFields {
    url: String,
}

impl ProfilePictureFields {
    pub fn new(url: String) -> Result<Self, ValidationError> {
        Ok(Self {
            url: absolute_url("url", url)?,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<'de> Deserialize<'de> for ProfilePictureFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Helper {
            url: String,
        }

        let h = Helper::deserialize(deserializer)?;
        ProfilePictureFields::new(h.url).map_err(serde::de::Error::custom)
    }
}

// ========================= Biography =========================

#[derive(Debug, Clone, PartialEq)]
pub struct BiographyFields {
    biography: String,
    intro: String,
}

impl BiographyFields {
    /// `intro` may be empty; the biography may not.
    pub fn new(biography: String, intro: String) -> Result<Self, ValidationError> {
        Ok(Self {
            biography: required_text("biography", biography)?,
            intro: intro.trim().to_string(),
        })
    }

    pub fn biography(&self) -> &str {
        &self.biography
    }

    pub fn intro(&self) -> &str {
        &self.intro
    }
}

impl<'de> Deserialize<'de> for BiographyFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Helper {
            biography: String,
            #[serde(default)]
            intro: String,
        }

        let h = Helper::deserialize(deserializer)?;
        BiographyFields::new(h.biography, h.intro).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BiographyPatch {
    biography: PatchField<String>,
    intro: PatchField<String>,
}

impl BiographyPatch {
    pub fn new(
        biography: PatchField<String>,
        intro: PatchField<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            biography: required_patch("biography", biography)?,
            intro: non_null_patch("intro", intro)?.try_map(|v| {
                Ok::<_, ValidationError>(v.trim().to_string())
            })?,
        })
    }

    pub fn biography(&self) -> &PatchField<String> {
        &self.biography
    }

    pub fn intro(&self) -> &PatchField<String> {
        &self.intro
    }
}

impl<'de> Deserialize<'de> for BiographyPatch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Helper {
            #[serde(default)]
            biography: PatchField<String>,
            #[serde(default)]
            intro: PatchField<String>,
        }

        let h = Helper::deserialize(deserializer)?;
        BiographyPatch::new(h.biography, h.intro).map_err(serde::de::Error::custom)
    }
}

// ========================= Resume =========================

/// The file URL and its display name always change together.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFields {
    resume: String,
    file_name: String,
}

impl ResumeFields {
    pub fn new(resume: String, file_name: String) -> Result<Self, ValidationError> {
        Ok(Self {
            resume: absolute_url("resume", resume)?,
            file_name: required_text("fileName", file_name)?,
        })
    }

    pub fn resume(&self) -> &str {
        &self.resume
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl<'de> Deserialize<'de> for ResumeFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct Helper {
            resume: String,
            file_name: String,
        }

        let h = Helper::deserialize(deserializer)?;
        ResumeFields::new(h.resume, h.file_name).map_err(serde::de::Error::custom)
    }
}

// ========================= Project =========================

#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    title: String,
    description: String,
    technologies: Vec<String>,
    github_url: Option<String>,
    live_url: Option<String>,
    image: Option<String>,
    is_completed: bool,
}

impl NewProject {
    pub fn new(
        title: String,
        description: String,
        techs: Vec<String>,
        github_url: Option<String>,
        live_url: Option<String>,
        image: Option<String>,
        is_completed: bool,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required_text("title", title)?,
            description: required_text("description", description)?,
            technologies: technologies(techs),
            github_url: optional_url("githubUrl", github_url)?,
            live_url: optional_url("liveUrl", live_url)?,
            image: optional_url("image", image)?,
            is_completed,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn github_url(&self) -> Option<&str> {
        self.github_url.as_deref()
    }

    pub fn live_url(&self) -> Option<&str> {
        self.live_url.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }
}

impl<'de> Deserialize<'de> for NewProject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct Helper {
            title: String,
            description: String,
            #[serde(default)]
            technologies: Vec<String>,
            #[serde(default)]
            github_url: Option<String>,
            #[serde(default)]
            live_url: Option<String>,
            #[serde(default)]
            image: Option<String>,
            #[serde(default)]
            is_completed: bool,
        }

        let h = Helper::deserialize(deserializer)?;
        NewProject::new(
            h.title,
            h.description,
            h.technologies,
            h.github_url,
            h.live_url,
            h.image,
            h.is_completed,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectPatch {
    title: PatchField<String>,
    description: PatchField<String>,
    technologies: PatchField<Vec<String>>,
    github_url: PatchField<String>,
    live_url: PatchField<String>,
    image: PatchField<String>,
    is_completed: PatchField<bool>,
}

impl ProjectPatch {
    pub fn new(
        title: PatchField<String>,
        description: PatchField<String>,
        techs: PatchField<Vec<String>>,
        github_url: PatchField<String>,
        live_url: PatchField<String>,
        image: PatchField<String>,
        is_completed: PatchField<bool>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required_patch("title", title)?,
            description: required_patch("description", description)?,
            technologies: non_null_patch("technologies", techs)?
                .try_map(|v| Ok::<_, ValidationError>(technologies(v)))?,
            github_url: optional_url_patch("githubUrl", github_url)?,
            live_url: optional_url_patch("liveUrl", live_url)?,
            image: optional_url_patch("image", image)?,
            is_completed: non_null_patch("isCompleted", is_completed)?,
        })
    }

    pub fn title(&self) -> &PatchField<String> {
        &self.title
    }

    pub fn description(&self) -> &PatchField<String> {
        &self.description
    }

    pub fn technologies(&self) -> &PatchField<Vec<String>> {
        &self.technologies
    }

    pub fn github_url(&self) -> &PatchField<String> {
        &self.github_url
    }

    pub fn live_url(&self) -> &PatchField<String> {
        &self.live_url
    }

    pub fn image(&self) -> &PatchField<String> {
        &self.image
    }

    pub fn is_completed(&self) -> &PatchField<bool> {
        &self.is_completed
    }
}

impl<'de> Deserialize<'de> for ProjectPatch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct Helper {
            #[serde(default)]
            title: PatchField<String>,
            #[serde(default)]
            description: PatchField<String>,
            #[serde(default)]
            technologies: PatchField<Vec<String>>,
            #[serde(default)]
            github_url: PatchField<String>,
            #[serde(default)]
            live_url: PatchField<String>,
            #[serde(default)]
            image: PatchField<String>,
            #[serde(default)]
            is_completed: PatchField<bool>,
        }

        let h = Helper::deserialize(deserializer)?;
        ProjectPatch::new(
            h.title,
            h.description,
            h.technologies,
            h.github_url,
            h.live_url,
            h.image,
            h.is_completed,
        )
        .map_err(serde::de::Error::custom)
    }
}

// ========================= Skill =========================

#[derive(Debug, Clone, PartialEq)]
pub struct NewSkill {
    name: String,
    category: SkillCategory,
    proficiency: Proficiency,
    icon: Option<String>,
}

impl NewSkill {
    pub fn new(
        name: String,
        category: &str,
        proficiency: i64,
        icon: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("name", name)?,
            category: SkillCategory::from_label(category)?,
            proficiency: Proficiency::new(proficiency)?,
            icon: optional_text(icon),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> SkillCategory {
        self.category
    }

    pub fn proficiency(&self) -> Proficiency {
        self.proficiency
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

impl<'de> Deserialize<'de> for NewSkill {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Helper {
            name: String,
            category: String,
            proficiency: i64,
            #[serde(default)]
            icon: Option<String>,
        }

        let h = Helper::deserialize(deserializer)?;
        NewSkill::new(h.name, &h.category, h.proficiency, h.icon).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillPatch {
    name: PatchField<String>,
    category: PatchField<SkillCategory>,
    proficiency: PatchField<Proficiency>,
    icon: PatchField<String>,
}

impl SkillPatch {
    pub fn new(
        name: PatchField<String>,
        category: PatchField<String>,
        proficiency: PatchField<i64>,
        icon: PatchField<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_patch("name", name)?,
            category: non_null_patch("category", category)?
                .try_map(|v| SkillCategory::from_label(&v))?,
            proficiency: non_null_patch("proficiency", proficiency)?.try_map(Proficiency::new)?,
            icon: optional_patch(icon),
        })
    }

    pub fn name(&self) -> &PatchField<String> {
        &self.name
    }

    pub fn category(&self) -> &PatchField<SkillCategory> {
        &self.category
    }

    pub fn proficiency(&self) -> &PatchField<Proficiency> {
        &self.proficiency
    }

    pub fn icon(&self) -> &PatchField<String> {
        &self.icon
    }
}

impl<'de> Deserialize<'de> for SkillPatch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Helper {
            #[serde(default)]
            name: PatchField<String>,
            #[serde(default)]
            category: PatchField<String>,
            #[serde(default)]
            proficiency: PatchField<i64>,
            #[serde(default)]
            icon: PatchField<String>,
        }

        let h = Helper::deserialize(deserializer)?;
        SkillPatch::new(h.name, h.category, h.proficiency, h.icon)
            .map_err(serde::de::Error::custom)
    }
}
