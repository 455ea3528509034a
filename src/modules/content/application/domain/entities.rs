use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

//
// ──────────────────────────────────────────────────────────
// Singleton records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePicture {
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The "about" document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biography {
    pub id: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: String,
    /// Public URL of the uploaded file.
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

//
// ──────────────────────────────────────────────────────────
// Collection records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: Proficiency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

//
// ──────────────────────────────────────────────────────────
// Skill category
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SkillCategory {
    Frontend,
    Backend,
    FullStack,
    Mobile,
    DevOpsCloud,
    Database,
    Design,
    ToolsTechnologies,
    ProgrammingLanguages,
    FrameworksLibraries,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 11] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::FullStack,
        SkillCategory::Mobile,
        SkillCategory::DevOpsCloud,
        SkillCategory::Database,
        SkillCategory::Design,
        SkillCategory::ToolsTechnologies,
        SkillCategory::ProgrammingLanguages,
        SkillCategory::FrameworksLibraries,
        SkillCategory::Other,
    ];

    /// Stored and displayed label.
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend Development",
            SkillCategory::Backend => "Backend Development",
            SkillCategory::FullStack => "Full-Stack Development",
            SkillCategory::Mobile => "Mobile Development",
            SkillCategory::DevOpsCloud => "DevOps & Cloud",
            SkillCategory::Database => "Database",
            SkillCategory::Design => "Design",
            SkillCategory::ToolsTechnologies => "Tools & Technologies",
            SkillCategory::ProgrammingLanguages => "Programming Languages",
            SkillCategory::FrameworksLibraries => "Frameworks & Libraries",
            SkillCategory::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, ValidationError> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .ok_or_else(|| ValidationError::UnknownCategory(label.to_string()))
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for SkillCategory {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value)
    }
}

impl From<SkillCategory> for String {
    fn from(value: SkillCategory) -> Self {
        value.label().to_string()
    }
}

//
// ──────────────────────────────────────────────────────────
// Proficiency
// ──────────────────────────────────────────────────────────
//

/// Skill level in percent. Values outside `0..=100` cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Proficiency(u8);

impl Proficiency {
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::ProficiencyOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Proficiency {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Proficiency> for i64 {
    fn from(value: Proficiency) -> Self {
        i64::from(value.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// Display helpers
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

/// Groups skills by category, categories ordered by first appearance.
pub fn group_by_category(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: skill.category,
                skills: vec![skill],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn skill(name: &str, category: SkillCategory) -> Skill {
        Skill {
            id: name.to_lowercase(),
            name: name.to_string(),
            category,
            proficiency: Proficiency::new(50).unwrap(),
            icon: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn proficiency_bounds() {
        assert_eq!(Proficiency::new(0).unwrap().value(), 0);
        assert_eq!(Proficiency::new(100).unwrap().value(), 100);
        assert_eq!(
            Proficiency::new(150),
            Err(ValidationError::ProficiencyOutOfRange(150))
        );
        assert_eq!(
            Proficiency::new(-1),
            Err(ValidationError::ProficiencyOutOfRange(-1))
        );
    }

    #[test]
    fn proficiency_rejects_out_of_range_json() {
        let ok: Proficiency = serde_json::from_value(json!(75)).unwrap();
        assert_eq!(ok.value(), 75);
        assert!(serde_json::from_value::<Proficiency>(json!(150)).is_err());
    }

    #[test]
    fn category_labels_round_trip() {
        for category in SkillCategory::ALL {
            assert_eq!(SkillCategory::from_label(category.label()), Ok(category));
        }
        assert_eq!(
            serde_json::to_value(SkillCategory::DevOpsCloud).unwrap(),
            json!("DevOps & Cloud")
        );
        assert!(SkillCategory::from_label("Cooking").is_err());
    }

    #[test]
    fn group_by_category_keeps_first_seen_order() {
        let groups = group_by_category(vec![
            skill("React", SkillCategory::Frontend),
            skill("Rust", SkillCategory::ProgrammingLanguages),
            skill("Vue", SkillCategory::Frontend),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, SkillCategory::Frontend);
        assert_eq!(groups[0].skills.len(), 2);
        assert_eq!(groups[1].category, SkillCategory::ProgrammingLanguages);
    }

    #[test]
    fn records_read_camel_case_documents() {
        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "title": "Portfolio",
            "description": "This site",
            "githubUrl": "https://github.com/owner/site",
            "createdAt": "2026-01-01T00:00:00.000000Z"
        }))
        .unwrap();

        assert_eq!(project.github_url.as_deref(), Some("https://github.com/owner/site"));
        assert!(project.technologies.is_empty());
        assert!(!project.is_completed);
        assert!(project.created_at.is_some());
    }
}
