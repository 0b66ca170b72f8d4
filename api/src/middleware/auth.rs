//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, runs it through
//! the token service (signature, expiry, revocation ledger), and injects an
//! [`AuthContext`] into the request on success.
//!
//! The rejection status coding is part of the API contract:
//! - no token at all → **403** "Access denied. No token provided."
//! - revoked token → **403** "Token has been revoked. Please log in again."
//! - malformed or expired token → **401** "Invalid or expired token."

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::{header::AUTHORIZATION, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use pb_core::domain::entities::token::Claims;
use pb_core::errors::{DomainError, TokenError};
use pb_core::repositories::TokenRepository;
use pb_core::services::token::TokenService;
use pb_shared::types::ErrorBody;

/// Authenticated caller context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from the token's subject
    pub user_id: Uuid,
    /// Role label carried by the token
    pub role: String,
    /// JWT ID of the presented token
    pub jti: String,
}

impl AuthContext {
    /// Build a context from verified claims
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidTokenFormat))?;
        Ok(Self {
            user_id,
            role: claims.role,
            jti: claims.jti,
        })
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));
        ready(result)
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth<T: TokenRepository> {
    token_service: Arc<TokenService<T>>,
}

impl<T: TokenRepository> JwtAuth<T> {
    /// Create the middleware around a token service
    pub fn new(token_service: Arc<TokenService<T>>) -> Self {
        Self { token_service }
    }
}

impl<S, B, T> Transform<S, ServiceRequest> for JwtAuth<T>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    T: TokenRepository + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S, T>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S, T: TokenRepository> {
    service: Rc<S>,
    token_service: Arc<TokenService<T>>,
}

impl<S, B, T> Service<ServiceRequest> for JwtAuthMiddleware<S, T>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    T: TokenRepository + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Ok(deny(
                        req,
                        StatusCode::FORBIDDEN,
                        "Access denied. No token provided.",
                    ));
                }
            };

            match token_service.verify_token(&token).await {
                Ok(claims) => match AuthContext::from_claims(claims) {
                    Ok(context) => {
                        req.extensions_mut().insert(context);
                        service
                            .call(req)
                            .await
                            .map(ServiceResponse::map_into_left_body)
                    }
                    Err(_) => Ok(deny(
                        req,
                        StatusCode::UNAUTHORIZED,
                        "Invalid or expired token.",
                    )),
                },
                Err(DomainError::Token(TokenError::TokenRevoked)) => Ok(deny(
                    req,
                    StatusCode::FORBIDDEN,
                    "Token has been revoked. Please log in again.",
                )),
                Err(DomainError::Token(TokenError::InvalidTokenFormat))
                | Err(DomainError::Token(TokenError::TokenExpired)) => Ok(deny(
                    req,
                    StatusCode::UNAUTHORIZED,
                    "Invalid or expired token.",
                )),
                Err(e) => {
                    // Ledger lookup failure; the token's standing is unknown
                    log::error!("Token verification failed: {}", e);
                    Ok(deny(
                        req,
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error",
                    ))
                }
            }
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Short-circuit the request with a `{message}` body
fn deny<B>(req: ServiceRequest, status: StatusCode, message: &str) -> ServiceResponse<EitherBody<B>> {
    let (request, _) = req.into_parts();
    let response = HttpResponse::build(status)
        .json(ErrorBody::new(message))
        .map_into_right_body();
    ServiceResponse::new(request, response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_extraction() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer token-123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("token-123".to_string()));

        let req_no_scheme = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "token-123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_scheme), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
