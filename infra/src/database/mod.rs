//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Repository pattern implementations

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::create_pool;
pub use mysql::{MySqlProjectRepository, MySqlTokenRepository, MySqlUserRepository};
