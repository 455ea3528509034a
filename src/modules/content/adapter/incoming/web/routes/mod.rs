mod biography;
mod errors;
mod profile;
mod profile_picture;
mod projects;
mod resume;
mod skills;

pub use biography::{
    create_biography_handler, get_biography_handler, update_biography_handler,
    upsert_biography_handler,
};
pub use profile::{
    create_profile_handler, get_profile_handler, update_profile_handler, upsert_profile_handler,
};
pub use profile_picture::{get_profile_picture_handler, upsert_profile_picture_handler};
pub use projects::{
    create_project_handler, delete_project_handler, get_project_handler, list_projects_handler,
    update_project_handler,
};
pub use resume::{get_resume_handler, upsert_resume_handler};
pub use skills::{
    create_skill_handler, delete_skill_handler, grouped_skills_handler, list_skills_handler,
    update_skill_handler,
};
