use crate::domain::article::Article;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::comment::{Comment, NewComment};
use crate::domain::user::User;
use crate::pagination::Paginated;
use crate::repository::{ArticleReader, CommentReader, CommentWriter, Pagination};
use crate::services::{ServiceError, ServiceResult, ensure_admin};

/// Adds a comment to an existing article. The article's comment counter is
/// updated alongside the insert.
pub fn create_comment<R>(
    repo: &R,
    user: &AuthenticatedUser,
    article_id: i32,
    content: &str,
) -> ServiceResult<Comment>
where
    R: ArticleReader + CommentWriter + ?Sized,
{
    if repo.get_article_by_id(article_id)?.is_none() {
        return Err(ServiceError::NotFound("Article not found".into()));
    }

    let new_comment = NewComment::new(content.to_string(), user.sub, article_id);
    if new_comment.content.is_empty() {
        return Err(ServiceError::Validation(
            "Comment content cannot be empty".into(),
        ));
    }

    repo.create_comment(&new_comment).map_err(Into::into)
}

/// Comments on an article, newest first, with the commenting users.
pub fn list_article_comments<R>(
    repo: &R,
    article_id: i32,
    page: usize,
    limit: usize,
) -> ServiceResult<Paginated<(Comment, User)>>
where
    R: CommentReader + ?Sized,
{
    let (total, items) =
        repo.list_article_comments(article_id, Some(Pagination { page, per_page: limit }))?;
    Ok(Paginated::new(items, page, limit, total))
}

/// Deletes a comment. Users may delete their own; admins may delete any.
pub fn delete_comment<R>(
    repo: &R,
    user: &AuthenticatedUser,
    comment_id: i32,
) -> ServiceResult<()>
where
    R: CommentReader + CommentWriter + ?Sized,
{
    let comment = repo
        .get_comment_by_id(comment_id)?
        .ok_or_else(|| ServiceError::NotFound("Comment not found".into()))?;

    if !user.is_admin() && comment.user_id != user.sub {
        return Err(ServiceError::Forbidden("Permission denied".into()));
    }

    repo.delete_comment(comment_id).map_err(Into::into)
}

/// The calling user's own comments with the commented articles.
pub fn list_user_comments<R>(
    repo: &R,
    user: &AuthenticatedUser,
    page: usize,
    limit: usize,
) -> ServiceResult<Paginated<(Comment, Article)>>
where
    R: CommentReader + ?Sized,
{
    let (total, items) =
        repo.list_user_comments(user.sub, Some(Pagination { page, per_page: limit }))?;
    Ok(Paginated::new(items, page, limit, total))
}

/// Site-wide moderation feed (admin only).
pub fn list_recent_comments<R>(
    repo: &R,
    user: &AuthenticatedUser,
    page: usize,
    limit: usize,
) -> ServiceResult<Paginated<(Comment, User)>>
where
    R: CommentReader + ?Sized,
{
    ensure_admin(user)?;
    let (total, items) =
        repo.list_recent_comments(Some(Pagination { page, per_page: limit }))?;
    Ok(Paginated::new(items, page, limit, total))
}
