//! Authentication DTOs

use serde::{Deserialize, Serialize};

/// Request body for POST /api/usrs/login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for a successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}
