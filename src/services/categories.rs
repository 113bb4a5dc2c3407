use crate::domain::auth::AuthenticatedUser;
use crate::domain::category::{Category, NewCategory, UpdateCategory};
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult, ensure_admin};

/// All categories, name-ascending, each with its article count.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<(Category, usize)>>
where
    R: CategoryReader + ?Sized,
{
    repo.list_categories().map_err(Into::into)
}

pub fn get_category_by_slug<R>(repo: &R, slug: &str) -> ServiceResult<(Category, usize)>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_slug(slug)?
        .ok_or_else(|| ServiceError::NotFound("Category not found".into()))
}

pub fn create_category<R>(
    repo: &R,
    user: &AuthenticatedUser,
    new_category: &NewCategory,
) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    ensure_admin(user)?;
    repo.create_category(new_category).map_err(slug_conflict)
}

pub fn update_category<R>(
    repo: &R,
    user: &AuthenticatedUser,
    category_id: i32,
    updates: &UpdateCategory,
) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    ensure_admin(user)?;
    repo.update_category(category_id, updates)
        .map_err(slug_conflict)
}

pub fn delete_category<R>(
    repo: &R,
    user: &AuthenticatedUser,
    category_id: i32,
) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    ensure_admin(user)?;
    repo.delete_category(category_id).map_err(Into::into)
}

fn slug_conflict(err: crate::repository::errors::RepositoryError) -> ServiceError {
    if err.is_unique_violation() {
        ServiceError::Conflict("Slug already in use".into())
    } else {
        err.into()
    }
}
