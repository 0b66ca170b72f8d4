//! Request-boundary helpers

pub mod error;
