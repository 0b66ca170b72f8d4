//! Integration tests for the user and project CRUD surface.

use std::sync::Arc;

use actix_web::{http::header, test, web};
use uuid::Uuid;

use pb_api::app::create_app;
use pb_api::routes::AppState;
use pb_core::domain::entities::user::Role;
use pb_core::repositories::{MockProjectRepository, MockTokenRepository, MockUserRepository};
use pb_core::services::{
    AuthService, ProjectService, TokenService, TokenServiceConfig, UserService,
};

const JWT_SECRET: &str = "test-secret";

type TestState = AppState<MockUserRepository, MockProjectRepository, MockTokenRepository>;

fn test_state() -> web::Data<TestState> {
    let user_repo = Arc::new(MockUserRepository::new());
    let project_repo = Arc::new(MockProjectRepository::new());
    let token_repo = Arc::new(MockTokenRepository::new());

    let token_service =
        Arc::new(TokenService::new(token_repo, TokenServiceConfig::new(JWT_SECRET)).unwrap());

    web::Data::new(AppState {
        auth_service: Arc::new(AuthService::new(user_repo.clone(), token_service.clone())),
        user_service: Arc::new(UserService::new(user_repo.clone())),
        project_service: Arc::new(ProjectService::new(project_repo, user_repo)),
        token_service,
    })
}

fn auth_header(state: &web::Data<TestState>) -> (header::HeaderName, String) {
    let token = state
        .token_service
        .issue_token(Uuid::new_v4(), Role::Admin)
        .unwrap();
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

fn signup_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "first_name": "jane",
        "last_name": "DOE",
        "gender": "female",
        "birthday": "1990-04-02",
        "email": email,
        "password": "password123",
        "role": "Project Manager"
    })
}

#[actix_web::test]
async fn signup_creates_a_normalized_user_without_leaking_the_hash() {
    let state = test_state();
    let auth = auth_header(&state);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/usrs/add")
        .insert_header(auth.clone())
        .set_json(signup_body("jane@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["first_name"], "Jane");
    assert_eq!(body["last_name"], "Doe");
    assert_eq!(body["role"], "Project Manager");
    assert!(body.get("password_hash").is_none());

    // The new account shows up in the listing
    let req = test::TestRequest::get()
        .uri("/api/usrs")
        .insert_header(auth)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let listing: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(listing.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn duplicate_email_signup_is_400() {
    let state = test_state();
    let auth = auth_header(&state);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/usrs/add")
        .insert_header(auth.clone())
        .set_json(signup_body("jane@example.com"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/usrs/add")
        .insert_header(auth)
        .set_json(signup_body("jane@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User already exists");
}

#[actix_web::test]
async fn unknown_user_id_is_404() {
    let state = test_state();
    let auth = auth_header(&state);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/usrs/{}", Uuid::new_v4()))
        .insert_header(auth)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User with this ID doesn't exist");
}

#[actix_web::test]
async fn update_rejects_short_replacement_password() {
    let state = test_state();
    let auth = auth_header(&state);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/usrs/add")
        .insert_header(auth.clone())
        .set_json(signup_body("jane@example.com"))
        .to_request();
    let created: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/usrs/update/{}", id))
        .insert_header(auth)
        .set_json(serde_json::json!({ "password": "short" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Password must be at least 8 characters long");
}

#[actix_web::test]
async fn project_creation_requires_existing_manager() {
    let state = test_state();
    let auth = auth_header(&state);
    let app = test::init_service(create_app(state)).await;

    let ghost = Uuid::new_v4();
    let req = test::TestRequest::post()
        .uri("/api/prj/add")
        .insert_header(auth)
        .set_json(serde_json::json!({
            "project_name": "Website relaunch",
            "description": "Rebuild the marketing site",
            "project_manager": ghost,
            "contributors": []
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.contains(&format!("Project manager with ID {} does not exist", ghost)));
}

#[actix_web::test]
async fn project_lifecycle_over_http() {
    let state = test_state();
    let auth = auth_header(&state);
    let app = test::init_service(create_app(state)).await;

    // A manager account to reference
    let req = test::TestRequest::post()
        .uri("/api/usrs/add")
        .insert_header(auth.clone())
        .set_json(signup_body("pm@example.com"))
        .to_request();
    let manager: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let manager_id = manager["id"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/prj/add")
        .insert_header(auth.clone())
        .set_json(serde_json::json!({
            "project_name": "Website relaunch",
            "description": "Rebuild the marketing site",
            "project_manager": manager_id,
            "contributors": [],
            "project_link": "https://example.com/relaunch"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let project: serde_json::Value = test::read_body_json(resp).await;
    let project_id = project["id"].as_str().unwrap().to_string();

    // Partial update
    let req = test::TestRequest::patch()
        .uri(&format!("/api/prj/update/{}", project_id))
        .insert_header(auth.clone())
        .set_json(serde_json::json!({ "description": "Phase two" }))
        .to_request();
    let updated: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["description"], "Phase two");
    assert_eq!(updated["project_name"], "Website relaunch");

    // Wipe
    let req = test::TestRequest::delete()
        .uri("/api/prj/deleteall")
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "1 projects deleted");

    let req = test::TestRequest::get()
        .uri("/api/prj/getall")
        .insert_header(auth)
        .to_request();
    let listing: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(listing.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn unknown_routes_answer_404() {
    let state = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Route not found");

    // And the root probe answers
    let req = test::TestRequest::get().uri("/").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Connection established");
}
