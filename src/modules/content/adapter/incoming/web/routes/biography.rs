use actix_web::{get, patch, post, put, web, Responder};

use super::errors::content_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::domain::{BiographyFields, BiographyPatch};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/about")]
pub async fn get_biography_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.biography.get().await {
        Ok(biography) => ApiResponse::success(biography),
        Err(e) => content_error_response(e),
    }
}

#[post("/api/admin/about")]
pub async fn create_biography_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<BiographyFields>,
) -> impl Responder {
    match data.content.biography.create(payload.into_inner()).await {
        Ok(biography) => ApiResponse::created(biography),
        Err(e) => content_error_response(e),
    }
}

#[put("/api/admin/about")]
pub async fn upsert_biography_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<BiographyFields>,
) -> impl Responder {
    match data.content.biography.upsert(payload.into_inner()).await {
        Ok(biography) => ApiResponse::success(biography),
        Err(e) => content_error_response(e),
    }
}

#[patch("/api/admin/about")]
pub async fn update_biography_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<BiographyPatch>,
) -> impl Responder {
    match data.content.biography.update(payload.into_inner()).await {
        Ok(biography) => ApiResponse::success(biography),
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

    macro_rules! about_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(TestAppStateBuilder::default().build())
                    .app_data(web::Data::new(test_token_provider()))
                    .app_data(custom_json_config())
                    .service(get_biography_handler)
                    .service(create_biography_handler)
                    .service(upsert_biography_handler)
                    .service(update_biography_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn biography_is_null_then_created() {
        let app = about_app!();

        let req = test::TestRequest::get().uri("/api/about").to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(json["data"].is_null());

        let req = test::TestRequest::post()
            .uri("/api/admin/about")
            .insert_header(bearer())
            .set_json(json!({ "biography": "Hi", "intro": "Hello" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/api/about").to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["data"]["biography"], "Hi");
        assert_eq!(json["data"]["intro"], "Hello");
        assert!(json["data"]["updatedAt"].is_string());
    }

    #[actix_web::test]
    async fn patch_keeps_other_field() {
        let app = about_app!();

        let req = test::TestRequest::put()
            .uri("/api/admin/about")
            .insert_header(bearer())
            .set_json(json!({ "biography": "Hi", "intro": "Hello" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::patch()
            .uri("/api/admin/about")
            .insert_header(bearer())
            .set_json(json!({ "intro": "Welcome" }))
            .to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(json["data"]["biography"], "Hi");
        assert_eq!(json["data"]["intro"], "Welcome");
    }

    #[actix_web::test]
    async fn empty_biography_is_rejected() {
        let app = about_app!();

        let req = test::TestRequest::post()
            .uri("/api/admin/about")
            .insert_header(bearer())
            .set_json(json!({ "biography": "  ", "intro": "Hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
