use actix_web::{get, Responder};
use serde::Serialize;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;

#[derive(Serialize)]
struct CurrentAdminResponse {
    email: String,
}

#[get("/api/auth/me")]
pub async fn current_admin_handler(admin: AdminUser) -> impl Responder {
    ApiResponse::success(CurrentAdminResponse { email: admin.email })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};

    use crate::tests::support::auth_helper::{bearer, test_token_provider};

    #[actix_web::test]
    async fn returns_identity_from_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_token_provider()))
                .service(current_admin_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["email"], "owner@example.com");
    }

    #[actix_web::test]
    async fn rejects_anonymous_caller() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_token_provider()))
                .service(current_admin_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/auth/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
