//! MySQL implementation of the ProjectRepository trait.
//!
//! The contributor list is stored as a JSON array of UUID strings in a
//! single column; it is always read and written whole, so a join table
//! would buy nothing here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pb_core::domain::entities::project::Project;
use pb_core::errors::DomainError;
use pb_core::repositories::ProjectRepository;

const PROJECT_COLUMNS: &str =
    "id, project_name, description, project_manager, contributors, project_link, created_at";

/// MySQL implementation of ProjectRepository
pub struct MySqlProjectRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlProjectRepository {
    /// Create a new MySQL project repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Project entity
    fn row_to_project(row: &sqlx::mysql::MySqlRow) -> Result<Project, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
        let manager: String = row
            .try_get("project_manager")
            .map_err(|e| DomainError::database(format!("Failed to get project_manager: {}", e)))?;
        let contributors_json: String = row
            .try_get("contributors")
            .map_err(|e| DomainError::database(format!("Failed to get contributors: {}", e)))?;

        let contributors: Vec<Uuid> =
            serde_json::from_str(&contributors_json).map_err(|e| DomainError::Internal {
                message: format!("Invalid contributors payload: {}", e),
            })?;

        Ok(Project {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid project UUID: {}", e),
            })?,
            project_name: row
                .try_get("project_name")
                .map_err(|e| DomainError::database(format!("Failed to get project_name: {}", e)))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::database(format!("Failed to get description: {}", e)))?,
            project_manager: Uuid::parse_str(&manager).map_err(|e| DomainError::Internal {
                message: format!("Invalid manager UUID: {}", e),
            })?,
            contributors,
            project_link: row
                .try_get("project_link")
                .map_err(|e| DomainError::database(format!("Failed to get project_link: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
        })
    }

    fn contributors_to_json(contributors: &[Uuid]) -> Result<String, DomainError> {
        serde_json::to_string(contributors).map_err(|e| DomainError::Internal {
            message: format!("Failed to encode contributors: {}", e),
        })
    }
}

#[async_trait]
impl ProjectRepository for MySqlProjectRepository {
    async fn find_all(&self) -> Result<Vec<Project>, DomainError> {
        let query = format!(
            "SELECT {} FROM projects ORDER BY created_at DESC",
            PROJECT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to list projects: {}", e)))?;

        rows.iter().map(Self::row_to_project).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, DomainError> {
        let query = format!("SELECT {} FROM projects WHERE id = ?", PROJECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find project: {}", e)))?;

        row.as_ref().map(Self::row_to_project).transpose()
    }

    async fn create(&self, project: Project) -> Result<Project, DomainError> {
        let query = r#"
            INSERT INTO projects (
                id, project_name, description, project_manager,
                contributors, project_link, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(project.id.to_string())
            .bind(&project.project_name)
            .bind(&project.description)
            .bind(project.project_manager.to_string())
            .bind(Self::contributors_to_json(&project.contributors)?)
            .bind(&project.project_link)
            .bind(project.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to create project: {}", e)))?;

        Ok(project)
    }

    async fn update(&self, project: Project) -> Result<Option<Project>, DomainError> {
        let query = r#"
            UPDATE projects
            SET project_name = ?, description = ?, project_manager = ?,
                contributors = ?, project_link = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&project.project_name)
            .bind(&project.description)
            .bind(project.project_manager.to_string())
            .bind(Self::contributors_to_json(&project.contributors)?)
            .bind(&project.project_link)
            .bind(project.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update project: {}", e)))?;

        if result.rows_affected() == 0 {
            return self
                .find_by_id(project.id)
                .await
                .map(|found| found.map(|_| project));
        }
        Ok(Some(project))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Project>, DomainError> {
        let existing = self.find_by_id(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete project: {}", e)))?;

        Ok(existing)
    }

    async fn delete_all(&self) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM projects")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete projects: {}", e)))?;

        Ok(result.rows_affected() as usize)
    }
}
