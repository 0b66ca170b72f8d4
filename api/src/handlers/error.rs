//! Mapping of domain errors to HTTP responses.
//!
//! Every failed request ends up here and leaves as a `{message}` JSON body.
//! Storage and internal failures are logged with their detail and reach the
//! client only as a generic 500.

use actix_web::HttpResponse;

use pb_core::errors::{AuthError, DomainError, TokenError};
use pb_shared::types::ErrorBody;

/// Convert a domain error into the HTTP response the API contract pins
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
            HttpResponse::BadRequest().json(ErrorBody::new(error.to_string()))
        }

        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials | AuthError::UserAlreadyExists => {
                HttpResponse::BadRequest().json(ErrorBody::new(auth_error.to_string()))
            }
            AuthError::UserNotFound => {
                HttpResponse::NotFound().json(ErrorBody::new(auth_error.to_string()))
            }
        },

        DomainError::NotFound { .. } => {
            HttpResponse::NotFound().json(ErrorBody::new(error.to_string()))
        }

        DomainError::Token(token_error) => match token_error {
            TokenError::TokenMissing | TokenError::TokenRevoked => {
                HttpResponse::Forbidden().json(ErrorBody::new(token_error.to_string()))
            }
            TokenError::InvalidTokenFormat | TokenError::TokenExpired => {
                HttpResponse::Unauthorized().json(ErrorBody::new("Invalid or expired token."))
            }
            TokenError::TokenGenerationFailed => {
                log::error!("Token generation failed");
                HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"))
            }
        },

        DomainError::Database { .. } | DomainError::Internal { .. } => {
            log::error!("Request failed: {}", error);
            HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"))
        }
    }
}
