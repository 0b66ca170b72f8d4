//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{resource} with this ID doesn't exist")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Convenience constructor for storage-layer failures
    pub fn database(message: impl Into<String>) -> Self {
        DomainError::Database {
            message: message.into(),
        }
    }

    /// Convenience constructor for not-found resources
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
