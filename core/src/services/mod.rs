//! Business services orchestrating domain logic.

pub mod auth;
pub mod project;
pub mod token;
pub mod user;

pub use auth::AuthService;
pub use project::{NewProject, ProjectService, ProjectUpdate};
pub use token::{SweeperConfig, TokenService, TokenServiceConfig, TokenSweeper};
pub use user::{NewUser, UserService, UserUpdate};
