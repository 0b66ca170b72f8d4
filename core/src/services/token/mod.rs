//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - JWT access token issuance and verification
//! - Revocation of tokens before their natural expiry (logout)
//! - Background sweeping of expired revocation entries

mod config;
mod service;
mod sweeper;

pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use sweeper::{SweeperConfig, TokenSweeper};
