//! User CRUD route handlers (all behind the JWT middleware)

pub mod crud;

pub use crud::{add_user, delete_user, get_user, list_users, update_user};
