//! Handler for POST /api/usrs/login

use actix_web::{web, HttpResponse};

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use pb_core::repositories::{ProjectRepository, TokenRepository, UserRepository};

/// Verify credentials and issue an access token
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "Login successful", "token": "<jwt>" }
/// ```
///
/// ## Errors
/// - 400 "Missing required fields" — blank email or password
/// - 400 "Invalid credentials" — unknown email or wrong password, one body
///   for both
pub async fn login<U, P, T>(
    state: web::Data<AppState<U, P, T>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TokenRepository + 'static,
{
    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok((token, _user)) => HttpResponse::Ok().json(LoginResponse {
            message: "Login successful".to_string(),
            token,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
