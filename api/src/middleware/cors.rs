//! CORS middleware configuration for cross-origin requests.
//!
//! The API is consumed by a separately-hosted browser front end, so the
//! policy allows credentials and the exact method/header set the client
//! uses. Credentialed requests require explicit origins; a wildcard origin
//! with credentials is rejected by browsers and by actix-cors itself.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates the CORS middleware for the current environment.
///
/// # Environment Variables
/// - `ALLOWED_ORIGINS`: comma-separated list of allowed origins; when set,
///   credentials are allowed for those origins. When unset (development),
///   any origin is allowed without credentials.
/// - `CORS_MAX_AGE`: preflight cache lifetime in seconds (default 3600)
pub fn create_cors() -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(max_age);

    match env::var("ALLOWED_ORIGINS") {
        Ok(origins) => origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .fold(cors.supports_credentials(), |cors, origin| {
                cors.allowed_origin(origin)
            }),
        Err(_) => {
            log::info!("ALLOWED_ORIGINS not set, allowing any origin");
            cors.allow_any_origin()
        }
    }
}
