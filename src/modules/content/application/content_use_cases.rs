use std::sync::Arc;

use crate::modules::content::application::domain::kinds::{
    BiographyKind, ProfileKind, ProfilePictureKind, ProjectKind, ResumeKind, SkillKind,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    CollectionContentUseCases, SingletonContentUseCases,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub profile: Arc<dyn SingletonContentUseCases<ProfileKind> + Send + Sync>,
    pub profile_picture: Arc<dyn SingletonContentUseCases<ProfilePictureKind> + Send + Sync>,
    pub biography: Arc<dyn SingletonContentUseCases<BiographyKind> + Send + Sync>,
    pub resume: Arc<dyn SingletonContentUseCases<ResumeKind> + Send + Sync>,
    pub projects: Arc<dyn CollectionContentUseCases<ProjectKind> + Send + Sync>,
    pub skills: Arc<dyn CollectionContentUseCases<SkillKind> + Send + Sync>,
}
