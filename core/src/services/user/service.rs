//! Account lifecycle: signup validation, password hashing, profile updates
//! and deletion.

use std::sync::Arc;

use chrono::NaiveDate;
use pb_shared::utils::validation::{is_valid_email, is_valid_password, not_empty};
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::user::{normalize_name, Gender, Role, User};
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::UserRepository;

/// Cost factor for bcrypt password hashing
const BCRYPT_COST: u32 = 10;

/// Validated input for creating a user account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birthday: NaiveDate,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub profile_picture: Option<String>,
}

/// Partial update for a user account; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub birthday: Option<NaiveDate>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub profile_picture: Option<String>,
}

/// Service handling user account management
pub struct UserService<U: UserRepository> {
    repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    /// List every account, newest first
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.repository.find_all().await
    }

    /// Fetch a single account by id
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Register a new account
    ///
    /// The plaintext password is validated, hashed and discarded here;
    /// nothing below this layer ever sees it.
    pub async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        let email = input.email.trim().to_string();

        if !not_empty(&input.first_name)
            || !not_empty(&input.last_name)
            || !not_empty(&email)
            || !not_empty(&input.password)
        {
            return Err(ValidationError::MissingFields.into());
        }
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if !is_valid_password(&input.password) {
            return Err(ValidationError::PasswordTooShort.into());
        }

        if self.repository.exists_by_email(&email).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = hash_password(&input.password)?;
        let user = User::new(
            &input.first_name,
            &input.last_name,
            input.gender,
            input.birthday,
            email,
            password_hash,
            input.role,
            input.profile_picture,
        );

        let created = self.repository.create(user).await?;
        info!("Created user {}", created.id);
        Ok(created)
    }

    /// Apply a partial update to an existing account
    ///
    /// A changed email is re-validated and checked for uniqueness against
    /// every other account; a new password goes through the same length
    /// check and hashing as signup.
    pub async fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<User, DomainError> {
        let mut user = self.get_user(id).await?;

        if let Some(first_name) = update.first_name {
            if !not_empty(&first_name) {
                return Err(ValidationError::MissingFields.into());
            }
            user.first_name = normalize_name(&first_name);
        }
        if let Some(last_name) = update.last_name {
            if !not_empty(&last_name) {
                return Err(ValidationError::MissingFields.into());
            }
            user.last_name = normalize_name(&last_name);
        }
        if let Some(gender) = update.gender {
            user.gender = gender;
        }
        if let Some(birthday) = update.birthday {
            user.birthday = birthday;
        }
        if let Some(email) = update.email {
            let email = email.trim().to_string();
            if !is_valid_email(&email) {
                return Err(ValidationError::InvalidEmail.into());
            }
            if email != user.email && self.repository.exists_by_email(&email).await? {
                return Err(AuthError::UserAlreadyExists.into());
            }
            user.email = email;
        }
        if let Some(password) = update.password {
            if !is_valid_password(&password) {
                return Err(ValidationError::PasswordTooShort.into());
            }
            user.password_hash = hash_password(&password)?;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(profile_picture) = update.profile_picture {
            user.profile_picture = profile_picture;
        }

        self.repository
            .update(user)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Delete an account, returning the removed record
    pub async fn delete_user(&self, id: Uuid) -> Result<User, DomainError> {
        let removed = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        info!("Deleted user {}", removed.id);
        Ok(removed)
    }
}

fn hash_password(password: &str) -> Result<String, DomainError> {
    bcrypt::hash(password, BCRYPT_COST).map_err(|e| DomainError::Internal {
        message: format!("password hashing failed: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepository;

    fn sample_input() -> NewUser {
        NewUser {
            first_name: "jane".to_string(),
            last_name: "DOE".to_string(),
            gender: Gender::Female,
            birthday: NaiveDate::from_ymd_opt(1990, 4, 2).unwrap(),
            email: "jane@example.com".to_string(),
            password: "correct-horse".to_string(),
            role: Role::User,
            profile_picture: None,
        }
    }

    fn service() -> UserService<MockUserRepository> {
        UserService::new(Arc::new(MockUserRepository::new()))
    }

    #[tokio::test]
    async fn create_normalizes_names_and_hashes_password() {
        let svc = service();
        let user = svc.create_user(sample_input()).await.unwrap();

        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "Doe");
        assert_ne!(user.password_hash, "correct-horse");
        assert!(bcrypt::verify("correct-horse", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn create_rejects_short_password() {
        let svc = service();
        let mut input = sample_input();
        input.password = "short".to_string();

        let err = svc.create_user(input).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::ValidationErr(ValidationError::PasswordTooShort)
        ));
    }

    #[tokio::test]
    async fn create_rejects_malformed_email() {
        let svc = service();
        let mut input = sample_input();
        input.email = "not-an-email".to_string();

        let err = svc.create_user(input).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::ValidationErr(ValidationError::InvalidEmail)
        ));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email() {
        let svc = service();
        svc.create_user(sample_input()).await.unwrap();

        let err = svc.create_user(sample_input()).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::UserAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let svc = service();
        let created = svc.create_user(sample_input()).await.unwrap();

        let updated = svc
            .update_user(
                created.id,
                UserUpdate {
                    first_name: Some("janet".to_string()),
                    role: Some(Role::Admin),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Janet");
        assert_eq!(updated.role, Role::Admin);
        assert_eq!(updated.last_name, created.last_name);
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.password_hash, created.password_hash);
    }

    #[tokio::test]
    async fn update_rehashes_a_new_password() {
        let svc = service();
        let created = svc.create_user(sample_input()).await.unwrap();

        let updated = svc
            .update_user(
                created.id,
                UserUpdate {
                    password: Some("battery-staple".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_ne!(updated.password_hash, created.password_hash);
        assert!(bcrypt::verify("battery-staple", &updated.password_hash).unwrap());
    }

    #[tokio::test]
    async fn update_keeps_unchanged_own_email() {
        let svc = service();
        let created = svc.create_user(sample_input()).await.unwrap();

        // Re-submitting the current email must not trip the uniqueness check
        let updated = svc
            .update_user(
                created.id,
                UserUpdate {
                    email: Some("jane@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.email, "jane@example.com");
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let svc = service();
        let err = svc.get_user(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.to_string(), "User with this ID doesn't exist");

        let err = svc
            .update_user(Uuid::new_v4(), UserUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let err = svc.delete_user(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_returns_the_removed_record() {
        let svc = service();
        let created = svc.create_user(sample_input()).await.unwrap();

        let removed = svc.delete_user(created.id).await.unwrap();
        assert_eq!(removed.id, created.id);
        assert!(svc.get_user(created.id).await.is_err());
    }
}
