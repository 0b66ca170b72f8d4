//! Error type definitions for authentication, token management, and
//! validation.
//!
//! HTTP status mapping happens in the presentation layer; these enums only
//! carry the failure reason.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown identity or wrong secret; the two cases are deliberately
    /// indistinguishable to the client
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors
///
/// The variants mirror the verifier's rejection order: missing, malformed,
/// expired, revoked.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Access denied. No token provided.")]
    TokenMissing,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token has been revoked. Please log in again.")]
    TokenRevoked,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid birthday format")]
    InvalidDate,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Contributors should be an array of user IDs")]
    InvalidContributors,
}
