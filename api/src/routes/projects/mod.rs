//! Project CRUD route handlers (all behind the JWT middleware)

pub mod crud;

pub use crud::{
    add_project, delete_all_projects, delete_project, get_project, list_projects, update_project,
};
