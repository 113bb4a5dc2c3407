use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Access level stored on the user row and carried inside JWTs.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::User => write!(f, "user"),
        }
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            "admin" => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

/// A registered account. The password hash never crosses the DTO boundary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub nickname: Option<String>,
}

impl NewUser {
    #[must_use]
    pub fn new(
        email: String,
        password_hash: String,
        role: UserRole,
        nickname: Option<String>,
    ) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password_hash,
            role,
            nickname: nickname
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Profile fields a user may change about themselves. `None` leaves the
/// stored value untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateProfile {
    pub nickname: Option<String>,
    pub bio: Option<String>,
}
