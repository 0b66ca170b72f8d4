//! Handler for POST /api/usrs/logout
//!
//! Logout performs its own token handling instead of sitting behind the
//! JWT middleware: its failure contract is 400-coded (a client ending a
//! session, not one being denied access), and a revoked token must still
//! reach the handler so a repeat logout can answer 200.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use pb_core::errors::{DomainError, TokenError};
use pb_core::repositories::{ProjectRepository, TokenRepository, UserRepository};
use pb_shared::types::{ErrorBody, MessageResponse};

/// Revoke the presented access token
///
/// # Response
///
/// - 200 "Logged out successfully, token revoked." — first revocation
/// - 200 "User already logged out. Token already revoked." — repeat
/// - 400 "No token provided" — no bearer token in the request
/// - 400 "Invalid token or token expired" — token fails verification; the
///   ledger is not touched
pub async fn logout<U, P, T>(req: HttpRequest, state: web::Data<AppState<U, P, T>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TokenRepository + 'static,
{
    let token = match extract_bearer_token(&req) {
        Some(token) => token,
        None => {
            return HttpResponse::BadRequest().json(ErrorBody::new("No token provided"));
        }
    };

    match state.token_service.revoke_token(&token).await {
        Ok(true) => HttpResponse::Ok().json(MessageResponse::new(
            "Logged out successfully, token revoked.",
        )),
        Ok(false) => HttpResponse::Ok().json(MessageResponse::new(
            "User already logged out. Token already revoked.",
        )),
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
        | Err(DomainError::Token(TokenError::TokenExpired)) => {
            HttpResponse::BadRequest().json(ErrorBody::new("Invalid token or token expired"))
        }
        Err(error) => handle_domain_error(&error),
    }
}

fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
