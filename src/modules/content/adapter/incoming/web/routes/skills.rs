use actix_web::{delete, get, patch, post, web, Responder};

use super::errors::content_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::domain::{group_by_category, NewSkill, SkillPatch};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/skills")]
pub async fn list_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.skills.list().await {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => content_error_response(e),
    }
}

/// Same list as `/api/skills`, grouped for display.
#[get("/api/skills/grouped")]
pub async fn grouped_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.skills.list().await {
        Ok(skills) => ApiResponse::success(group_by_category(skills)),
        Err(e) => content_error_response(e),
    }
}

#[post("/api/admin/skills")]
pub async fn create_skill_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<NewSkill>,
) -> impl Responder {
    match data.content.skills.create(payload.into_inner()).await {
        Ok(skill) => ApiResponse::created(skill),
        Err(e) => content_error_response(e),
    }
}

#[patch("/api/admin/skills/{id}")]
pub async fn update_skill_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
    payload: web::Json<SkillPatch>,
) -> impl Responder {
    let id = path.into_inner();

    match data.content.skills.update(&id, payload.into_inner()).await {
        Ok(skill) => ApiResponse::success(skill),
        Err(e) => content_error_response(e),
    }
}

#[delete("/api/admin/skills/{id}")]
pub async fn delete_skill_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.content.skills.delete(&id).await {
        Ok(()) => ApiResponse::no_content(),
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

    macro_rules! skills_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(TestAppStateBuilder::default().build())
                    .app_data(web::Data::new(test_token_provider()))
                    .app_data(custom_json_config())
                    .service(grouped_skills_handler)
                    .service(list_skills_handler)
                    .service(create_skill_handler)
                    .service(update_skill_handler)
                    .service(delete_skill_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn react_proficiency_goes_from_75_to_90() {
        let app = skills_app!();

        let req = test::TestRequest::post()
            .uri("/api/admin/skills")
            .insert_header(bearer())
            .set_json(json!({
                "name": "React",
                "category": "Frontend Development",
                "proficiency": 75
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: serde_json::Value = test::read_body_json(resp).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/skills/{id}"))
            .insert_header(bearer())
            .set_json(json!({ "proficiency": 90 }))
            .to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(json["data"]["name"], "React");
        assert_eq!(json["data"]["category"], "Frontend Development");
        assert_eq!(json["data"]["proficiency"], 90);
    }

    #[actix_web::test]
    async fn out_of_range_proficiency_is_400() {
        let app = skills_app!();

        let req = test::TestRequest::post()
            .uri("/api/admin/skills")
            .insert_header(bearer())
            .set_json(json!({
                "name": "React",
                "category": "Frontend Development",
                "proficiency": 150
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn grouped_skills_follow_first_appearance() {
        let app = skills_app!();

        for (name, category) in [
            ("Postgres", "Database"),
            ("React", "Frontend Development"),
            ("Redis", "Database"),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/admin/skills")
                .insert_header(bearer())
                .set_json(json!({ "name": name, "category": category, "proficiency": 80 }))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/api/skills/grouped").to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let groups = json["data"].as_array().unwrap();

        // Listed newest first, so Redis leads.
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0]["category"], "Database");
        assert_eq!(groups[0]["skills"].as_array().unwrap().len(), 2);
        assert_eq!(groups[1]["category"], "Frontend Development");
    }

    #[actix_web::test]
    async fn delete_unknown_skill_is_204() {
        let app = skills_app!();

        let req = test::TestRequest::delete()
            .uri("/api/admin/skills/ghost")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}
