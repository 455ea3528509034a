use actix_web::HttpResponse;

use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::shared::api::ApiResponse;

/// Shared mapping of content failures onto the response envelope.
pub(super) fn content_error_response(err: ContentError) -> HttpResponse {
    match err {
        ContentError::NotFound(kind) => ApiResponse::not_found(
            &format!("{}_NOT_FOUND", kind.to_ascii_uppercase()),
            &err.to_string(),
        ),
        ContentError::AlreadyExists(kind) => ApiResponse::conflict(
            &format!("{}_ALREADY_EXISTS", kind.to_ascii_uppercase()),
            &err.to_string(),
        ),
        ContentError::Unavailable(_) => ApiResponse::service_unavailable(),
        ContentError::CreationFailed(_) | ContentError::Repository(_) => {
            ApiResponse::internal_error()
        }
    }
}
