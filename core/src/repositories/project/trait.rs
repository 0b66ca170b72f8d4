//! Project repository trait defining the interface for project persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::project::Project;
use crate::errors::DomainError;

/// Repository trait for Project entity persistence operations
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// List all projects
    async fn find_all(&self) -> Result<Vec<Project>, DomainError>;

    /// Find a project by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, DomainError>;

    /// Persist a new project
    async fn create(&self, project: Project) -> Result<Project, DomainError>;

    /// Replace an existing project record
    ///
    /// # Returns
    /// * `Ok(Some(Project))` - The updated record
    /// * `Ok(None)` - No project with the given id
    async fn update(&self, project: Project) -> Result<Option<Project>, DomainError>;

    /// Delete a project, returning the removed record
    async fn delete(&self, id: Uuid) -> Result<Option<Project>, DomainError>;

    /// Delete every project, returning how many were removed
    async fn delete_all(&self) -> Result<usize, DomainError>;
}
