//! Login flow: credential check against the user store, then token
//! issuance through the token service.

use std::sync::Arc;

use pb_shared::utils::validation::not_empty;
use tracing::{debug, info};

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::TokenService;

/// Service handling credential verification and session issuance
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    user_repository: Arc<U>,
    token_service: Arc<TokenService<T>>,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService<T>>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Verify an email/password pair and issue an access token
    ///
    /// Unknown email and wrong password both fail with the same
    /// `InvalidCredentials` error so the response never reveals whether the
    /// account exists. Returns the token together with the authenticated
    /// user.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), DomainError> {
        let email = email.trim();
        let password = password.trim();

        if !not_empty(email) || !not_empty(password) {
            return Err(ValidationError::MissingFields.into());
        }

        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches =
            bcrypt::verify(password, &user.password_hash).map_err(|e| DomainError::Internal {
                message: format!("password verification failed: {}", e),
            })?;

        if !matches {
            debug!("Password mismatch for {}", email);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue_token(user.id, user.role)?;
        info!("User {} logged in", user.id);
        Ok((token, user))
    }
}
