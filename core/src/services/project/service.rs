//! Project lifecycle: creation with referential checks against the user
//! store, partial updates, deletion.

use std::sync::Arc;

use pb_shared::utils::validation::not_empty;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::project::Project;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{ProjectRepository, UserRepository};

/// Validated input for creating a project
#[derive(Debug, Clone)]
pub struct NewProject {
    pub project_name: String,
    pub description: String,
    pub project_manager: Uuid,
    pub contributors: Vec<Uuid>,
    pub project_link: String,
}

/// Partial update for a project; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub project_name: Option<String>,
    pub description: Option<String>,
    pub project_manager: Option<Uuid>,
    pub contributors: Option<Vec<Uuid>>,
    pub project_link: Option<String>,
}

/// Service handling project management
///
/// Holds the user repository alongside the project repository because the
/// manager and contributor references must resolve to real accounts.
pub struct ProjectService<P, U>
where
    P: ProjectRepository,
    U: UserRepository,
{
    repository: Arc<P>,
    user_repository: Arc<U>,
}

impl<P, U> ProjectService<P, U>
where
    P: ProjectRepository,
    U: UserRepository,
{
    pub fn new(repository: Arc<P>, user_repository: Arc<U>) -> Self {
        Self {
            repository,
            user_repository,
        }
    }

    /// List every project
    pub async fn list_projects(&self) -> Result<Vec<Project>, DomainError> {
        self.repository.find_all().await
    }

    /// Fetch a single project by id
    pub async fn get_project(&self, id: Uuid) -> Result<Project, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Project"))
    }

    /// Create a project after resolving its user references
    pub async fn create_project(&self, input: NewProject) -> Result<Project, DomainError> {
        if !not_empty(&input.project_name) || !not_empty(&input.description) {
            return Err(ValidationError::MissingFields.into());
        }

        self.check_manager_exists(input.project_manager).await?;
        self.check_contributors_exist(&input.contributors).await?;

        let project = Project::new(
            input.project_name.trim().to_string(),
            input.description.trim().to_string(),
            input.project_manager,
            input.contributors,
            input.project_link,
        );

        let created = self.repository.create(project).await?;
        info!("Created project {}", created.id);
        Ok(created)
    }

    /// Apply a partial update to an existing project
    ///
    /// A changed manager or contributor list is re-validated against the
    /// user store before anything is written.
    pub async fn update_project(
        &self,
        id: Uuid,
        update: ProjectUpdate,
    ) -> Result<Project, DomainError> {
        let mut project = self.get_project(id).await?;

        if let Some(project_name) = update.project_name {
            if !not_empty(&project_name) {
                return Err(ValidationError::MissingFields.into());
            }
            project.project_name = project_name.trim().to_string();
        }
        if let Some(description) = update.description {
            if !not_empty(&description) {
                return Err(ValidationError::MissingFields.into());
            }
            project.description = description.trim().to_string();
        }
        if let Some(manager) = update.project_manager {
            self.check_manager_exists(manager).await?;
            project.project_manager = manager;
        }
        if let Some(contributors) = update.contributors {
            self.check_contributors_exist(&contributors).await?;
            project.contributors = contributors;
        }
        if let Some(project_link) = update.project_link {
            project.project_link = project_link;
        }

        self.repository
            .update(project)
            .await?
            .ok_or_else(|| DomainError::not_found("Project"))
    }

    /// Delete a project, returning the removed record
    pub async fn delete_project(&self, id: Uuid) -> Result<Project, DomainError> {
        let removed = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Project"))?;
        info!("Deleted project {}", removed.id);
        Ok(removed)
    }

    /// Delete every project, returning how many were removed
    pub async fn delete_all_projects(&self) -> Result<usize, DomainError> {
        let removed = self.repository.delete_all().await?;
        info!("Deleted all {} projects", removed);
        Ok(removed)
    }

    async fn check_manager_exists(&self, manager: Uuid) -> Result<(), DomainError> {
        if self.user_repository.find_by_id(manager).await?.is_none() {
            return Err(DomainError::Validation {
                message: format!("Project manager with ID {} does not exist", manager),
            });
        }
        Ok(())
    }

    async fn check_contributors_exist(&self, contributors: &[Uuid]) -> Result<(), DomainError> {
        for contributor in contributors {
            if self
                .user_repository
                .find_by_id(*contributor)
                .await?
                .is_none()
            {
                return Err(DomainError::Validation {
                    message: format!("Contributor with ID {} does not exist", contributor),
                });
            }
        }
        Ok(())
    }
}
