use actix_web::{http::header, post, web, HttpRequest, HttpResponse, Responder};
use tracing::{debug, error};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::multimedia::application::domain::{
    UploadFolder, UploadPolicyError, UploadRequest,
};
use crate::modules::multimedia::application::ports::outgoing::UploadError;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const FILE_NAME_HEADER: &str = "X-File-Name";

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Raw file body; the name travels in `X-File-Name`, the type in `Content-Type`.
/// Responds with `{ url, fileName }` for the caller to store through a
/// content endpoint.
#[post("/api/admin/uploads/{folder}")]
pub async fn upload_blob_handler(
    _admin: AdminUser,
    req: HttpRequest,
    folder: web::Path<String>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let folder: UploadFolder = match folder.parse() {
        Ok(folder) => folder,
        Err(message) => return ApiResponse::bad_request("UNKNOWN_UPLOAD_FOLDER", &message),
    };

    let file_name = header_value(&req, FILE_NAME_HEADER);
    let content_type = header_value(&req, header::CONTENT_TYPE.as_str());

    if let Err(e) = data
        .upload_policy
        .check(&file_name, &content_type, body.len() as u64)
    {
        debug!(error = %e, %folder, "upload rejected by policy");
        return map_policy_error(e);
    }

    let request = UploadRequest {
        folder,
        file_name: file_name.trim().to_string(),
        content_type,
        bytes: body.to_vec(),
    };

    match data.blob_uploader.upload(request).await {
        Ok(blob) => ApiResponse::created(blob),
        Err(e) => map_upload_error(e),
    }
}

fn header_value(req: &HttpRequest, name: &str) -> String {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_policy_error(err: UploadPolicyError) -> HttpResponse {
    let message = err.to_string();
    match err {
        UploadPolicyError::TooLarge(_) => ApiResponse::payload_too_large("FILE_TOO_LARGE", &message),
        UploadPolicyError::UnsupportedType(_) => {
            ApiResponse::bad_request("UNSUPPORTED_FILE_TYPE", &message)
        }
        UploadPolicyError::EmptyFileName
        | UploadPolicyError::FileNameTooLong(_)
        | UploadPolicyError::EmptyFile => ApiResponse::bad_request("VALIDATION_ERROR", &message),
    }
}

fn map_upload_error(err: UploadError) -> HttpResponse {
    match err {
        UploadError::InvalidRequest(message) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &message)
        }
        other => {
            error!(error = %other, "upload failed");
            ApiResponse::bad_gateway("UPLOAD_FAILED", "The file could not be uploaded, please retry")
        }
    }
}
