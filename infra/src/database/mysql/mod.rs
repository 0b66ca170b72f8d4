//! MySQL repository implementations

mod project_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use project_repository_impl::MySqlProjectRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
