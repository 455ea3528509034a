use actix_web::{delete, get, patch, post, web, Responder};

use super::errors::content_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::domain::{NewProject, ProjectPatch};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects")]
pub async fn list_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.projects.list().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => content_error_response(e),
    }
}

#[get("/api/projects/{id}")]
pub async fn get_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.content.projects.get_by_id(&id).await {
        Ok(Some(project)) => ApiResponse::success(project),
        Ok(None) => ApiResponse::not_found("PROJECT_NOT_FOUND", "project not found"),
        Err(e) => content_error_response(e),
    }
}

#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<NewProject>,
) -> impl Responder {
    match data.content.projects.create(payload.into_inner()).await {
        Ok(project) => ApiResponse::created(project),
        Err(e) => content_error_response(e),
    }
}

#[patch("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
    payload: web::Json<ProjectPatch>,
) -> impl Responder {
    let id = path.into_inner();

    match data.content.projects.update(&id, payload.into_inner()).await {
        Ok(project) => ApiResponse::success(project),
        Err(e) => content_error_response(e),
    }
}

#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.content.projects.delete(&id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => content_error_response(e),
    }
}
