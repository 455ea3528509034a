use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::entities::{Biography, Profile, ProfilePicture, Project, Resume, Skill};
use super::inputs::{
    BiographyFields, BiographyPatch, NewProject, NewSkill, ProfileFields, ProfilePatch,
    ProfilePictureFields, ProjectPatch, ResumeFields, SkillPatch,
};

/// Fixed id of the one document a singleton kind ever stores.
pub const SINGLETON_DOCUMENT_ID: &str = "main";

//
// ──────────────────────────────────────────────────────────
// Cache keys
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Profile,
    ProfilePicture,
    About,
    Projects,
    Skills,
    MyResume,
}

impl CacheKey {
    pub const ALL: [CacheKey; 6] = [
        CacheKey::Profile,
        CacheKey::ProfilePicture,
        CacheKey::About,
        CacheKey::Projects,
        CacheKey::Skills,
        CacheKey::MyResume,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CacheKey::Profile => "profile",
            CacheKey::ProfilePicture => "profilePicture",
            CacheKey::About => "about",
            CacheKey::Projects => "projects",
            CacheKey::Skills => "skills",
            CacheKey::MyResume => "myResume",
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Kinds
// ──────────────────────────────────────────────────────────
//

/// A kind stored as exactly one document with id [`SINGLETON_DOCUMENT_ID`].
pub trait SingletonKind: Send + Sync + 'static {
    /// Human-readable name used in logs and error codes.
    const NAME: &'static str;
    const COLLECTION: &'static str;
    const CACHE_KEY: CacheKey;
    /// Whether documents of this kind carry `createdAt`.
    const STAMPS_CREATED_AT: bool;

    type Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;
    type Fields: Send + Sync + 'static;
    type Patch: Send + Sync + 'static;
}

/// A kind stored as many documents under store-generated ids.
pub trait CollectionKind: Send + Sync + 'static {
    const NAME: &'static str;
    const COLLECTION: &'static str;
    const CACHE_KEY: CacheKey;

    type Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;
    type NewRecord: Send + Sync + 'static;
    type Patch: Send + Sync + 'static;
}

pub struct ProfileKind;

impl SingletonKind for ProfileKind {
    const NAME: &'static str = "profile";
    const COLLECTION: &'static str = "profile";
    const CACHE_KEY: CacheKey = CacheKey::Profile;
    const STAMPS_CREATED_AT: bool = true;

    type Record = Profile;
    type Fields = ProfileFields;
    type Patch = ProfilePatch;
}

pub struct ProfilePictureKind;

impl SingletonKind for ProfilePictureKind {
    const NAME: &'static str = "profile_picture";
    const COLLECTION: &'static str = "profilePicture";
    const CACHE_KEY: CacheKey = CacheKey::ProfilePicture;
    const STAMPS_CREATED_AT: bool = true;

    type Record = ProfilePicture;
    type Fields = ProfilePictureFields;
    type Patch = ProfilePictureFields;
}

pub struct BiographyKind;

impl SingletonKind for BiographyKind {
    const NAME: &'static str = "about";
    const COLLECTION: &'static str = "about";
    const CACHE_KEY: CacheKey = CacheKey::About;
    const STAMPS_CREATED_AT: bool = false;

    type Record = Biography;
    type Fields = BiographyFields;
    type Patch = BiographyPatch;
}

pub struct ResumeKind;

impl SingletonKind for ResumeKind {
    const NAME: &'static str = "resume";
    const COLLECTION: &'static str = "myResume";
    const CACHE_KEY: CacheKey = CacheKey::MyResume;
    const STAMPS_CREATED_AT: bool = false;

    type Record = Resume;
    type Fields = ResumeFields;
    type Patch = ResumeFields;
}

pub struct ProjectKind;

impl CollectionKind for ProjectKind {
    const NAME: &'static str = "project";
    const COLLECTION: &'static str = "projects";
    const CACHE_KEY: CacheKey = CacheKey::Projects;

    type Record = Project;
    type NewRecord = NewProject;
    type Patch = ProjectPatch;
}

pub struct SkillKind;

impl CollectionKind for SkillKind {
    const NAME: &'static str = "skill";
    const COLLECTION: &'static str = "skills";
    const CACHE_KEY: CacheKey = CacheKey::Skills;

    type Record = Skill;
    type NewRecord = NewSkill;
    type Patch = SkillPatch;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_keys_are_stable_strings() {
        let keys: Vec<&str> = CacheKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["profile", "profilePicture", "about", "projects", "skills", "myResume"]
        );
    }

    #[test]
    fn singleton_collections_match_storage_layout() {
        assert_eq!(ProfileKind::COLLECTION, "profile");
        assert_eq!(ProfilePictureKind::COLLECTION, "profilePicture");
        assert_eq!(BiographyKind::COLLECTION, "about");
        assert_eq!(ResumeKind::COLLECTION, "myResume");
        assert_eq!(ProjectKind::COLLECTION, "projects");
        assert_eq!(SkillKind::COLLECTION, "skills");
    }
}
