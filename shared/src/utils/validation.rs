//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Email format matcher, mirroring the signup form's client-side check
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex is valid")
});

/// Check if a string is not empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string looks like an email address
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Minimum password length accepted at signup
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Check if a password meets the minimum length requirement
pub fn is_valid_password(value: &str) -> bool {
    value.len() >= MIN_PASSWORD_LENGTH
}
