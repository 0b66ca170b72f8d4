//! Integration tests for the logout endpoint.
//!
//! Logout is not behind the JWT middleware; its failures are 400-coded and
//! a repeat logout is a 200 no-op.

use std::sync::Arc;

use actix_web::{http::header, test, web};
use chrono::{Duration, Utc};

use pb_api::app::create_app;
use pb_api::routes::AppState;
use pb_core::domain::entities::token::Claims;
use pb_core::domain::entities::user::Role;
use pb_core::repositories::{MockProjectRepository, MockTokenRepository, MockUserRepository};
use pb_core::services::{
    AuthService, ProjectService, TokenService, TokenServiceConfig, UserService,
};

const JWT_SECRET: &str = "test-secret";

type TestState = AppState<MockUserRepository, MockProjectRepository, MockTokenRepository>;

fn test_state() -> (web::Data<TestState>, Arc<MockTokenRepository>) {
    let user_repo = Arc::new(MockUserRepository::new());
    let project_repo = Arc::new(MockProjectRepository::new());
    let token_repo = Arc::new(MockTokenRepository::new());

    let token_service = Arc::new(
        TokenService::new(token_repo.clone(), TokenServiceConfig::new(JWT_SECRET)).unwrap(),
    );

    let state = web::Data::new(AppState {
        auth_service: Arc::new(AuthService::new(user_repo.clone(), token_service.clone())),
        user_service: Arc::new(UserService::new(user_repo.clone())),
        project_service: Arc::new(ProjectService::new(project_repo, user_repo)),
        token_service,
    });
    (state, token_repo)
}

#[actix_web::test]
async fn logout_without_token_is_400() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post().uri("/api/usrs/logout").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No token provided");
}

#[actix_web::test]
async fn first_logout_revokes_and_repeat_is_a_noop() {
    let (state, token_repo) = test_state();
    let token = state
        .token_service
        .issue_token(uuid::Uuid::new_v4(), Role::User)
        .unwrap();

    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/usrs/logout")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Logged out successfully, token revoked.");

    // Same token again: still 200, different message, still one entry
    let req = test::TestRequest::post()
        .uri("/api/usrs/logout")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "User already logged out. Token already revoked."
    );

    assert_eq!(token_repo.len().await, 1);
}

#[actix_web::test]
async fn concurrent_logouts_of_the_same_token_both_succeed_with_one_entry() {
    let (state, token_repo) = test_state();
    let token = state
        .token_service
        .issue_token(uuid::Uuid::new_v4(), Role::User)
        .unwrap();

    let app = test::init_service(create_app(state)).await;

    // Two in-flight logouts racing for the same jti. Whichever order the
    // ledger resolves them in, neither caller sees an error and the entry
    // is written once.
    let first = test::TestRequest::post()
        .uri("/api/usrs/logout")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let second = test::TestRequest::post()
        .uri("/api/usrs/logout")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();

    let (resp_a, resp_b) = futures_util::join!(
        test::call_service(&app, first),
        test::call_service(&app, second)
    );

    assert_eq!(resp_a.status(), 200);
    assert_eq!(resp_b.status(), 200);
    assert_eq!(token_repo.len().await, 1);
}

#[actix_web::test]
async fn expired_token_logout_is_400_and_leaves_ledger_untouched() {
    let (state, token_repo) = test_state();
    let app = test::init_service(create_app(state)).await;

    let mut claims = Claims::new(uuid::Uuid::new_v4(), "User", 24);
    claims.iat = (Utc::now() - Duration::hours(3)).timestamp();
    claims.exp = (Utc::now() - Duration::hours(2)).timestamp();
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let req = test::TestRequest::post()
        .uri("/api/usrs/logout")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid token or token expired");
    assert!(token_repo.is_empty().await);
}

#[actix_web::test]
async fn logged_out_token_is_rejected_by_protected_routes() {
    let (state, _) = test_state();
    let token = state
        .token_service
        .issue_token(uuid::Uuid::new_v4(), Role::User)
        .unwrap();

    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/usrs/logout")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::get()
        .uri("/api/usrs")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
}
