//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// The email column is the login identity and must be unique; `create`
/// fails on a duplicate. Password hashes are stored as-is; hashing happens
/// in the service layer before a `User` is constructed.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users, newest first
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their email (case-sensitive exact match)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Auth(UserAlreadyExists))` - Duplicate email
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user record
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The updated record
    /// * `Ok(None)` - No user with the given id
    async fn update(&self, user: User) -> Result<Option<User>, DomainError>;

    /// Delete a user, returning the removed record
    async fn delete(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
