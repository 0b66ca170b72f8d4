//! In-memory implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::r#trait::UserRepository;

/// Mock user repository backed by a `HashMap`
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user directly, bypassing duplicate checks (test setup)
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Ok(None);
        }
        users.insert(user.id, user.clone());
        Ok(Some(user))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.write().await.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::{Gender, Role};
    use chrono::NaiveDate;

    fn user(email: &str) -> User {
        User::new(
            "test",
            "user",
            Gender::Other,
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            email.to_string(),
            "hash".to_string(),
            Role::User,
            None,
        )
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email() {
        let repo = MockUserRepository::new();
        repo.create(user("dup@example.com")).await.unwrap();

        let err = repo.create(user("dup@example.com")).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::UserAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn update_missing_user_returns_none() {
        let repo = MockUserRepository::new();
        let ghost = user("ghost@example.com");
        assert!(repo.update(ghost).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_returns_removed_record() {
        let repo = MockUserRepository::new();
        let created = repo.create(user("gone@example.com")).await.unwrap();

        let removed = repo.delete(created.id).await.unwrap().unwrap();
        assert_eq!(removed.id, created.id);
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }
}
