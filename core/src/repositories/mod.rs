//! Repository traits and their mock implementations.

pub mod project;
pub mod token;
pub mod user;

pub use project::ProjectRepository;
pub use token::TokenRepository;
pub use user::UserRepository;

pub use project::MockProjectRepository;
pub use token::MockTokenRepository;
pub use user::MockUserRepository;
