//! Domain entities representing core business objects.

pub mod project;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use project::Project;
pub use token::{Claims, RevokedToken, JWT_AUDIENCE, JWT_ISSUER};
pub use user::{Gender, Role, User, DEFAULT_PROFILE_PICTURE};
