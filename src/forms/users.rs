use serde::Deserialize;
use validator::Validate;

use crate::domain::user::UpdateProfile;

#[derive(Deserialize, Validate)]
/// Payload for creating an account.
pub struct RegisterForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub nickname: Option<String>,
}

#[derive(Deserialize, Validate)]
/// Payload for exchanging credentials for a token.
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Deserialize)]
/// Profile fields a user may change. Absent fields stay untouched.
pub struct UpdateProfileForm {
    pub nickname: Option<String>,
    pub bio: Option<String>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for rotating the account password.
pub struct ChangePasswordForm {
    #[validate(length(min = 1))]
    pub old_password: String,
    #[validate(length(min = 8, message = "New password must be at least 8 characters"))]
    pub new_password: String,
}

impl From<&UpdateProfileForm> for UpdateProfile {
    fn from(form: &UpdateProfileForm) -> Self {
        UpdateProfile {
            nickname: form.nickname.clone(),
            bio: form.bio.clone(),
        }
    }
}
