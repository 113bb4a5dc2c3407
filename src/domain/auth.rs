//! The authenticated caller as seen by services and routes.
//!
//! The struct doubles as the JWT claims payload; the actix extractor that
//! decodes it lives in `models::auth` behind the `server` feature.

use serde::{Deserialize, Serialize};

use crate::domain::user::{User, UserRole};

/// Number of seconds an issued token stays valid (7 days).
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    /// Subject: the user's id.
    pub sub: i32,
    pub email: String,
    pub role: UserRole,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

impl AuthenticatedUser {
    /// Claims for a freshly authenticated user, expiring [`TOKEN_TTL_SECS`]
    /// from `now`.
    pub fn new(user: &User, now: i64) -> Self {
        Self {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            exp: now + TOKEN_TTL_SECS,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn sample_user(role: UserRole) -> User {
        User {
            id: 7,
            email: "reader@example.com".into(),
            password_hash: "hash".into(),
            role,
            nickname: None,
            avatar: None,
            bio: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn claims_carry_identity_and_expiry() {
        let claims = AuthenticatedUser::new(&sample_user(UserRole::User), 1_000);
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.exp, 1_000 + TOKEN_TTL_SECS);
        assert!(!claims.is_admin());
    }

    #[test]
    fn admin_role_is_recognized() {
        let claims = AuthenticatedUser::new(&sample_user(UserRole::Admin), 0);
        assert!(claims.is_admin());
    }
}
