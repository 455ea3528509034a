pub mod entities;
pub mod inputs;
pub mod kinds;
pub mod validation;

pub use entities::{
    group_by_category, Biography, Profile, ProfilePicture, Proficiency, Project, Resume, Skill,
    SkillCategory, SkillGroup,
};
pub use inputs::{
    BiographyFields, BiographyPatch, NewProject, NewSkill, ProfileFields, ProfilePatch,
    ProfilePictureFields, ProjectPatch, ResumeFields, SkillPatch,
};
pub use kinds::{
    BiographyKind, CacheKey, CollectionKind, ProfileKind, ProfilePictureKind, ProjectKind,
    ResumeKind, SingletonKind, SkillKind, SINGLETON_DOCUMENT_ID,
};
pub use validation::ValidationError;
