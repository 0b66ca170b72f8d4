//! Project entity and its invariants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project tracked by the platform
///
/// `project_manager` and every entry in `contributors` must reference an
/// existing user; the project service enforces this at creation and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project
    pub id: Uuid,

    pub project_name: String,

    pub description: String,

    /// User responsible for the project
    pub project_manager: Uuid,

    /// Users contributing to the project
    pub contributors: Vec<Uuid>,

    /// Link to the project's external home (repo, tracker, ...)
    pub project_link: String,

    /// Timestamp when the project was created
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project with a freshly generated id
    pub fn new(
        project_name: String,
        description: String,
        project_manager: Uuid,
        contributors: Vec<Uuid>,
        project_link: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_name,
            description,
            project_manager,
            contributors,
            project_link,
            created_at: Utc::now(),
        }
    }

    /// Whether the given user participates in the project at all
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.project_manager == user_id || self.contributors.contains(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn involves_matches_manager_and_contributors() {
        let manager = Uuid::new_v4();
        let contributor = Uuid::new_v4();
        let outsider = Uuid::new_v4();

        let project = Project::new(
            "Website relaunch".to_string(),
            "Rebuild the marketing site".to_string(),
            manager,
            vec![contributor],
            "https://example.com/relaunch".to_string(),
        );

        assert!(project.involves(manager));
        assert!(project.involves(contributor));
        assert!(!project.involves(outsider));
    }

    #[test]
    fn new_projects_have_distinct_ids() {
        let manager = Uuid::new_v4();
        let a = Project::new(
            "A".into(),
            "first".into(),
            manager,
            vec![],
            "https://example.com/a".into(),
        );
        let b = Project::new(
            "B".into(),
            "second".into(),
            manager,
            vec![],
            "https://example.com/b".into(),
        );
        assert_ne!(a.id, b.id);
    }
}
