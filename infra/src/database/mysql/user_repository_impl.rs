//! MySQL implementation of the UserRepository trait.
//!
//! UUIDs are stored as CHAR(36) and enum-valued columns (`gender`, `role`)
//! hold the domain string labels, so rows remain readable in the database
//! console.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pb_core::domain::entities::user::{Gender, Role, User};
use pb_core::errors::{AuthError, DomainError};
use pb_core::repositories::UserRepository;

const USER_COLUMNS: &str = "id, first_name, last_name, gender, birthday, email, \
     password_hash, role, profile_picture, created_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
        let gender: String = row
            .try_get("gender")
            .map_err(|e| DomainError::database(format!("Failed to get gender: {}", e)))?;
        let role: String = row
            .try_get("role")
            .map_err(|e| DomainError::database(format!("Failed to get role: {}", e)))?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| DomainError::database(format!("Failed to get first_name: {}", e)))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| DomainError::database(format!("Failed to get last_name: {}", e)))?,
            gender: Gender::parse(&gender).ok_or_else(|| DomainError::Internal {
                message: format!("Unknown gender value in database: {}", gender),
            })?,
            birthday: row
                .try_get::<NaiveDate, _>("birthday")
                .map_err(|e| DomainError::database(format!("Failed to get birthday: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::database(format!("Failed to get email: {}", e)))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::database(format!("Failed to get password_hash: {}", e)))?,
            role: Role::parse(&role).ok_or_else(|| DomainError::Internal {
                message: format!("Unknown role value in database: {}", role),
            })?,
            profile_picture: row.try_get("profile_picture").map_err(|e| {
                DomainError::database(format!("Failed to get profile_picture: {}", e))
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users ORDER BY created_at DESC",
            USER_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to list users: {}", e)))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find user: {}", e)))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find user by email: {}", e)))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, first_name, last_name, gender, birthday, email,
                password_hash, role, profile_picture, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.gender.as_str())
            .bind(user.birthday)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(&user.profile_picture)
            .bind(user.created_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(user),
            // Unique key on email
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AuthError::UserAlreadyExists.into())
            }
            Err(e) => Err(DomainError::database(format!(
                "Failed to create user: {}",
                e
            ))),
        }
    }

    async fn update(&self, user: User) -> Result<Option<User>, DomainError> {
        let query = r#"
            UPDATE users
            SET first_name = ?, last_name = ?, gender = ?, birthday = ?,
                email = ?, password_hash = ?, role = ?, profile_picture = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.gender.as_str())
            .bind(user.birthday)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(&user.profile_picture)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update user: {}", e)))?;

        if result.rows_affected() == 0 {
            // Distinguish "no such row" from "no change": an update that
            // writes identical values still has a matching row
            return self.find_by_id(user.id).await.map(|found| found.map(|_| user));
        }
        Ok(Some(user))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let existing = self.find_by_id(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete user: {}", e)))?;

        Ok(existing)
    }
}
