//! Request and response DTOs

pub mod auth;
pub mod project;
pub mod user;

pub use auth::{LoginRequest, LoginResponse};
pub use project::{CreateProjectRequest, UpdateProjectRequest};
pub use user::{CreateUserRequest, UpdateUserRequest};
