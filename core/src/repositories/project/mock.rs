//! In-memory implementation of ProjectRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::project::Project;
use crate::errors::DomainError;

use super::r#trait::ProjectRepository;

/// Mock project repository backed by a `HashMap`
#[derive(Clone, Default)]
pub struct MockProjectRepository {
    projects: Arc<RwLock<HashMap<Uuid, Project>>>,
}

impl MockProjectRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn find_all(&self) -> Result<Vec<Project>, DomainError> {
        let projects = self.projects.read().await;
        let mut all: Vec<Project> = projects.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, DomainError> {
        Ok(self.projects.read().await.get(&id).cloned())
    }

    async fn create(&self, project: Project) -> Result<Project, DomainError> {
        self.projects
            .write()
            .await
            .insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(&self, project: Project) -> Result<Option<Project>, DomainError> {
        let mut projects = self.projects.write().await;
        if !projects.contains_key(&project.id) {
            return Ok(None);
        }
        projects.insert(project.id, project.clone());
        Ok(Some(project))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Project>, DomainError> {
        Ok(self.projects.write().await.remove(&id))
    }

    async fn delete_all(&self) -> Result<usize, DomainError> {
        let mut projects = self.projects.write().await;
        let count = projects.len();
        projects.clear();
        Ok(count)
    }
}
