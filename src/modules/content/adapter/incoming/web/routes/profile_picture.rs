use actix_web::{get, put, web, Responder};

use super::errors::content_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::domain::ProfilePictureFields;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/profile-picture")]
pub async fn get_profile_picture_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.profile_picture.get().await {
        Ok(picture) => ApiResponse::success(picture),
        Err(e) => content_error_response(e),
    }
}

/// Stores the URL of an already uploaded picture.
#[put("/api/admin/profile-picture")]
pub async fn upsert_profile_picture_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<ProfilePictureFields>,
) -> impl Responder {
    match data.content.profile_picture.upsert(payload.into_inner()).await {
        Ok(picture) => ApiResponse::success(picture),
        Err(e) => content_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};

    #[actix_web::test]
    async fn upsert_then_read() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(web::Data::new(test_token_provider()))
                .app_data(custom_json_config())
                .service(get_profile_picture_handler)
                .service(upsert_profile_picture_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/profile-picture")
            .insert_header(bearer())
            .set_json(json!({ "url": "https://cdn.example.com/me.png" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/profile-picture").to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(json["data"]["url"], "https://cdn.example.com/me.png");
    }

    #[actix_web::test]
    async fn relative_url_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(web::Data::new(test_token_provider()))
                .app_data(custom_json_config())
                .service(upsert_profile_picture_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/profile-picture")
            .insert_header(bearer())
            .set_json(json!({ "url": "/me.png" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
