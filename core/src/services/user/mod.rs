//! User account management service

mod service;

pub use service::{NewUser, UserService, UserUpdate};
