use actix_web::{get, put, web, Responder};

use super::errors::content_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::domain::ResumeFields;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/resume")]
pub async fn get_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.resume.get().await {
        Ok(resume) => ApiResponse::success(resume),
        Err(e) => content_error_response(e),
    }
}

/// URL and file name are always replaced together.
#[put("/api/admin/resume")]
pub async fn upsert_resume_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<ResumeFields>,
) -> impl Responder {
    match data.content.resume.upsert(payload.into_inner()).await {
        Ok(resume) => ApiResponse::success(resume),
        Err(e) => content_error_response(e),
    }
}
