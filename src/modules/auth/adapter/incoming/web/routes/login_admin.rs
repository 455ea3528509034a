use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::debug;

use crate::modules::auth::application::domain::LoginCommand;
use crate::modules::auth::application::ports::incoming::use_cases::LoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct LoginRequestDto {
    email: String,
    password: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/auth/login")]
pub async fn login_admin_handler(
    data: web::Data<AppState>,
    payload: web::Json<LoginRequestDto>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match LoginCommand::new(dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => {
            debug!(error = %e, "invalid login request");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.login_admin_use_case.execute(command).await {
        Ok(result) => ApiResponse::success(result),
        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(LoginError::Internal(_)) => ApiResponse::internal_error(),
    }
}
