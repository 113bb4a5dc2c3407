use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::user::{NewUser as DomainNewUser, User as DomainUser};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
/// Diesel model for [`crate::domain::user::User`]. The role is stored as
/// plain text and mapped to the domain enum on the way out.
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: String,
    pub nickname: Option<&'a str>,
}

impl From<User> for DomainUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role.into(),
            nickname: user.nickname,
            avatar: user.avatar,
            bio: user.bio,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(user: &'a DomainNewUser) -> Self {
        Self {
            email: user.email.as_str(),
            password_hash: user.password_hash.as_str(),
            role: user.role.to_string(),
            nickname: user.nickname.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::user::UserRole;

    #[test]
    fn unknown_role_text_falls_back_to_user() {
        let now = Utc::now().naive_utc();
        let db_user = User {
            id: 1,
            email: "e@example.com".into(),
            password_hash: "h".into(),
            role: "moderator".into(),
            nickname: None,
            avatar: None,
            bio: None,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainUser = db_user.into();
        assert_eq!(domain.role, UserRole::User);
    }
}
