use actix_web::{get, patch, post, put, web, Responder};

use super::errors::content_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::domain::{ProfileFields, ProfilePatch};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.profile.get().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => content_error_response(e),
    }
}

#[post("/api/admin/profile")]
pub async fn create_profile_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<ProfileFields>,
) -> impl Responder {
    match data.content.profile.create(payload.into_inner()).await {
        Ok(profile) => ApiResponse::created(profile),
        Err(e) => content_error_response(e),
    }
}

#[put("/api/admin/profile")]
pub async fn upsert_profile_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<ProfileFields>,
) -> impl Responder {
    match data.content.profile.upsert(payload.into_inner()).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => content_error_response(e),
    }
}

#[patch("/api/admin/profile")]
pub async fn update_profile_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<ProfilePatch>,
) -> impl Responder {
    match data.content.profile.update(payload.into_inner()).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => content_error_response(e),
    }
}
