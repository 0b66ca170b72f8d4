//! User entity representing a registered account in ProjBoard.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fallback avatar assigned when a signup carries no picture
pub const DEFAULT_PROFILE_PICTURE: &str = "https://fontawesome.com/icons/user?f=classic&s=solid";

/// Closed set of roles a user can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Moderator,
    Support,
    User,
    #[serde(rename = "Project Manager")]
    ProjectManager,
    #[serde(rename = "Project Worker")]
    ProjectWorker,
}

impl Role {
    /// Database/string representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Moderator => "Moderator",
            Role::Support => "Support",
            Role::User => "User",
            Role::ProjectManager => "Project Manager",
            Role::ProjectWorker => "Project Worker",
        }
    }

    /// Parse a role from its string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Admin" => Some(Role::Admin),
            "Moderator" => Some(Role::Moderator),
            "Support" => Some(Role::Support),
            "User" => Some(Role::User),
            "Project Manager" => Some(Role::ProjectManager),
            "Project Worker" => Some(Role::ProjectWorker),
            _ => None,
        }
    }
}

/// Gender of a user as self-reported at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// User entity representing a registered account
///
/// The password is only ever held as a bcrypt hash; plaintext secrets never
/// reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Given name, display-normalized at creation
    pub first_name: String,

    /// Family name, display-normalized at creation
    pub last_name: String,

    pub gender: Gender,

    pub birthday: NaiveDate,

    /// Login identity; unique across all users
    pub email: String,

    /// Salted bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub role: Role,

    pub profile_picture: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a freshly generated id
    ///
    /// First and last name are normalized to leading-uppercase for display;
    /// this is presentation convenience, not an identity rule.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: &str,
        last_name: &str,
        gender: Gender,
        birthday: NaiveDate,
        email: String,
        password_hash: String,
        role: Role,
        profile_picture: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: normalize_name(first_name),
            last_name: normalize_name(last_name),
            gender,
            birthday,
            email,
            password_hash,
            role,
            profile_picture: profile_picture.unwrap_or_else(|| DEFAULT_PROFILE_PICTURE.to_string()),
            created_at: Utc::now(),
        }
    }

    /// Full display name
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Uppercase the first character, lowercase the rest
pub fn normalize_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
