use bcrypt::{DEFAULT_COST, hash, verify};

use crate::domain::user::{NewUser, UpdateProfile, User, UserRole};
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

fn hash_password(password: &str) -> ServiceResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| ServiceError::Internal(format!("Failed to hash password: {e}")))
}

fn verify_password(password: &str, password_hash: &str) -> ServiceResult<bool> {
    verify(password, password_hash)
        .map_err(|e| ServiceError::Internal(format!("Failed to verify password: {e}")))
}

/// Creates a reader account. Format checks (email shape, password length)
/// happen at the form boundary; this enforces uniqueness.
pub fn register<R>(
    repo: &R,
    email: &str,
    password: &str,
    nickname: Option<String>,
) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    let email = email.trim().to_lowercase();

    if repo.get_user_by_email(&email)?.is_some() {
        return Err(ServiceError::Conflict("Email already registered".into()));
    }

    let password_hash = hash_password(password)?;
    let new_user = NewUser::new(email, password_hash, UserRole::User, nickname);

    repo.create_user(&new_user).map_err(Into::into)
}

/// Validates credentials and returns the account. Unknown email and wrong
/// password are indistinguishable to the caller.
pub fn login<R>(repo: &R, email: &str, password: &str) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    let email = email.trim().to_lowercase();

    let user = repo
        .get_user_by_email(&email)?
        .ok_or_else(|| ServiceError::Unauthorized("Invalid credentials".into()))?;

    if !verify_password(password, &user.password_hash)? {
        return Err(ServiceError::Unauthorized("Invalid credentials".into()));
    }

    Ok(user)
}

pub fn get_profile<R>(repo: &R, user_id: i32) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    repo.get_user_by_id(user_id)?
        .ok_or_else(|| ServiceError::NotFound("User not found".into()))
}

pub fn update_profile<R>(
    repo: &R,
    user_id: i32,
    updates: &UpdateProfile,
) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    if repo.get_user_by_id(user_id)?.is_none() {
        return Err(ServiceError::NotFound("User not found".into()));
    }
    repo.update_user_profile(user_id, updates).map_err(Into::into)
}

/// Swaps the password after verifying the current one.
pub fn change_password<R>(
    repo: &R,
    user_id: i32,
    old_password: &str,
    new_password: &str,
) -> ServiceResult<()>
where
    R: UserReader + UserWriter + ?Sized,
{
    let user = repo
        .get_user_by_id(user_id)?
        .ok_or_else(|| ServiceError::NotFound("User not found".into()))?;

    if !verify_password(old_password, &user.password_hash)? {
        return Err(ServiceError::Unauthorized(
            "Current password is incorrect".into(),
        ));
    }

    let password_hash = hash_password(new_password)?;
    repo.set_user_password(user_id, &password_hash)
        .map_err(Into::into)
}

pub fn update_avatar<R>(repo: &R, user_id: i32, avatar_url: &str) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    if repo.get_user_by_id(user_id)?.is_none() {
        return Err(ServiceError::NotFound("User not found".into()));
    }
    repo.set_user_avatar(user_id, avatar_url).map_err(Into::into)
}
