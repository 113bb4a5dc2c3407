use crate::domain::auth::AuthenticatedUser;
use crate::domain::tag::{NewTag, Tag, UpdateTag};
use crate::repository::{TagReader, TagWriter};
use crate::services::{ServiceError, ServiceResult, ensure_admin};

/// All tags, name-ascending, each with its article count (the tag cloud).
pub fn list_tags<R>(repo: &R) -> ServiceResult<Vec<(Tag, usize)>>
where
    R: TagReader + ?Sized,
{
    repo.list_tags().map_err(Into::into)
}

pub fn get_tag_by_slug<R>(repo: &R, slug: &str) -> ServiceResult<(Tag, usize)>
where
    R: TagReader + ?Sized,
{
    repo.get_tag_by_slug(slug)?
        .ok_or_else(|| ServiceError::NotFound("Tag not found".into()))
}

pub fn create_tag<R>(repo: &R, user: &AuthenticatedUser, new_tag: &NewTag) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    ensure_admin(user)?;
    repo.create_tag(new_tag).map_err(slug_conflict)
}

pub fn update_tag<R>(
    repo: &R,
    user: &AuthenticatedUser,
    tag_id: i32,
    updates: &UpdateTag,
) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    ensure_admin(user)?;
    repo.update_tag(tag_id, updates).map_err(slug_conflict)
}

pub fn delete_tag<R>(repo: &R, user: &AuthenticatedUser, tag_id: i32) -> ServiceResult<()>
where
    R: TagWriter + ?Sized,
{
    ensure_admin(user)?;
    repo.delete_tag(tag_id).map_err(Into::into)
}

fn slug_conflict(err: crate::repository::errors::RepositoryError) -> ServiceError {
    if err.is_unique_violation() {
        ServiceError::Conflict("Slug already in use".into())
    } else {
        err.into()
    }
}
