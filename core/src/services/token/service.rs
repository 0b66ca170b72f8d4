//! Main token service implementation

use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::Role;
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Service for issuing, verifying, and revoking JWT access tokens
///
/// Issuance is a pure function of the signing secret, the clock, and a
/// fresh `jti`; the revocation ledger is only consulted on verification and
/// only written on explicit revocation.
pub struct TokenService<R: TokenRepository> {
    repository: Arc<R>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// Fails when the signing secret is empty. That is a startup-time
    /// misconfiguration; callers must treat it as fatal rather than retry.
    pub fn new(repository: Arc<R>, config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.trim().is_empty() {
            return Err(DomainError::Internal {
                message: "JWT signing secret is not configured".to_string(),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        // Expiry is exact; no clock leeway
        validation.leeway = 0;

        Ok(Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed access token for an already-authenticated subject
    ///
    /// Every call mints a fresh `jti`, so each issued token can be revoked
    /// independently of the subject's other sessions.
    pub fn issue_token(&self, user_id: Uuid, role: Role) -> Result<String, DomainError> {
        let claims = Claims::new(user_id, role.as_str(), self.config.token_expiry_hours);
        self.encode_jwt(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Decodes and validates signature, structure, and expiry
    ///
    /// Runs entirely in-process; the revocation ledger is not consulted, so
    /// garbage input never costs a storage round trip.
    fn decode_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else {
                    DomainError::Token(TokenError::InvalidTokenFormat)
                }
            })?;
        Ok(token_data.claims)
    }

    /// Verifies an access token and returns its claims
    ///
    /// Rejection order: malformed or bad signature, then expired, then
    /// revoked. Exactly one ledger lookup happens, and only for tokens that
    /// pass the in-process checks.
    pub async fn verify_token(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = self.decode_token(token)?;

        if self.repository.is_revoked(&claims.jti).await? {
            return Err(DomainError::Token(TokenError::TokenRevoked));
        }

        Ok(claims)
    }

    /// Revokes a token until its natural expiry
    ///
    /// The token must still verify structurally; an expired or malformed
    /// token is rejected without touching the ledger. Returns `false` when
    /// the token was already revoked (repeat logout), `true` on first
    /// revocation. Re-revoking is a no-op success, never an error.
    pub async fn revoke_token(&self, token: &str) -> Result<bool, DomainError> {
        let claims = self.decode_token(token)?;

        let expires_at = claims.expires_at().ok_or_else(|| DomainError::Internal {
            message: format!("token {} carries an invalid expiry", claims.jti),
        })?;

        if self.repository.is_revoked(&claims.jti).await? {
            return Ok(false);
        }

        self.repository.revoke_token(&claims.jti, expires_at).await?;
        Ok(true)
    }
}
