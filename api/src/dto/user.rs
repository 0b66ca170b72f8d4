//! User DTOs
//!
//! `Gender`, `Role` and the birthday date deserialize through their serde
//! representations, so a label outside the closed sets or a malformed date
//! is rejected before the handler runs.

use chrono::NaiveDate;
use serde::Deserialize;

use pb_core::domain::entities::user::{Gender, Role};
use pb_core::services::{NewUser, UserUpdate};

/// Request body for POST /api/usrs/add
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birthday: NaiveDate,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub profile_picture: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            first_name: req.first_name,
            last_name: req.last_name,
            gender: req.gender,
            birthday: req.birthday,
            email: req.email,
            password: req.password,
            role: req.role,
            profile_picture: req.profile_picture,
        }
    }
}

/// Request body for PATCH /api/usrs/update/{id}
#[derive(Debug, Deserialize, Default)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub birthday: Option<NaiveDate>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub profile_picture: Option<String>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(req: UpdateUserRequest) -> Self {
        UserUpdate {
            first_name: req.first_name,
            last_name: req.last_name,
            gender: req.gender,
            birthday: req.birthday,
            email: req.email,
            password: req.password,
            role: req.role,
            profile_picture: req.profile_picture,
        }
    }
}
