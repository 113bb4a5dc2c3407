use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::user::{User, UserRole};

/// Public view of an account. The password hash never appears here.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Login/registration result: token plus the account it belongs to.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserDto,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            nickname: user.nickname,
            avatar: user.avatar,
            bio: user.bio,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn password_hash_never_serializes() {
        let user = User {
            id: 1,
            email: "reader@example.com".into(),
            password_hash: "super-secret-hash".into(),
            role: UserRole::User,
            nickname: None,
            avatar: None,
            bio: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        };
        let json = serde_json::to_string(&UserDto::from(user)).unwrap();
        assert!(!json.contains("super-secret-hash"));
        assert!(json.contains("\"role\":\"user\""));
    }
}
