//! Shared utilities and common types for the ProjBoard server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Common response structures
//! - Validation helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, ConfigError, DatabaseConfig, ServerConfig};
pub use types::{ErrorBody, MessageResponse};
pub use utils::validation;
