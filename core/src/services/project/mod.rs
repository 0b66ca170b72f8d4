//! Project management service

mod service;

pub use service::{NewProject, ProjectService, ProjectUpdate};
