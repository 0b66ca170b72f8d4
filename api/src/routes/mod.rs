//! Route handlers grouped by resource

pub mod auth;
pub mod projects;
pub mod users;

use std::sync::Arc;

use pb_core::repositories::{ProjectRepository, TokenRepository, UserRepository};
use pb_core::services::{AuthService, ProjectService, TokenService, UserService};

/// Application state holding the shared services
///
/// Generic over the repository implementations so the integration tests
/// can run the full HTTP stack against the in-memory mocks.
pub struct AppState<U, P, T>
where
    U: UserRepository,
    P: ProjectRepository,
    T: TokenRepository,
{
    pub auth_service: Arc<AuthService<U, T>>,
    pub user_service: Arc<UserService<U>>,
    pub project_service: Arc<ProjectService<P, U>>,
    pub token_service: Arc<TokenService<T>>,
}
