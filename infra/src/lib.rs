//! # Infrastructure Layer
//!
//! Concrete persistence implementations for the ProjBoard backend. The
//! repository traits live in `pb_core`; this crate binds them to MySQL via
//! SQLx.

pub mod database;

pub use database::{
    create_pool, MySqlProjectRepository, MySqlTokenRepository, MySqlUserRepository,
};
