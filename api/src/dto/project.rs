//! Project DTOs

use serde::Deserialize;
use uuid::Uuid;

use pb_core::services::{NewProject, ProjectUpdate};

/// Request body for POST /api/prj/add
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub project_name: String,
    pub description: String,
    pub project_manager: Uuid,
    #[serde(default)]
    pub contributors: Vec<Uuid>,
    #[serde(default)]
    pub project_link: String,
}

impl From<CreateProjectRequest> for NewProject {
    fn from(req: CreateProjectRequest) -> Self {
        NewProject {
            project_name: req.project_name,
            description: req.description,
            project_manager: req.project_manager,
            contributors: req.contributors,
            project_link: req.project_link,
        }
    }
}

/// Request body for PATCH /api/prj/update/{id}
#[derive(Debug, Deserialize, Default)]
pub struct UpdateProjectRequest {
    pub project_name: Option<String>,
    pub description: Option<String>,
    pub project_manager: Option<Uuid>,
    pub contributors: Option<Vec<Uuid>>,
    pub project_link: Option<String>,
}

impl From<UpdateProjectRequest> for ProjectUpdate {
    fn from(req: UpdateProjectRequest) -> Self {
        ProjectUpdate {
            project_name: req.project_name,
            description: req.description,
            project_manager: req.project_manager,
            contributors: req.contributors,
            project_link: req.project_link,
        }
    }
}
