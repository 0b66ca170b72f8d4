//! Authentication service for credential verification and session issuance

mod service;

pub use service::AuthService;
