use crate::domain::article::{ArticleWithRelations, NewArticle, UpdateArticle};
use crate::domain::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::{
    ArticleListQuery, ArticleReader, ArticleWriter, CategoryReader, TagReader,
};
use crate::services::{ServiceError, ServiceResult, ensure_admin};

/// Returns the newest-first page of articles.
pub fn list_articles<R>(
    repo: &R,
    page: usize,
    limit: usize,
) -> ServiceResult<Paginated<ArticleWithRelations>>
where
    R: ArticleReader + ?Sized,
{
    let (total, items) = repo.list_articles(ArticleListQuery::new().paginate(page, limit))?;
    Ok(Paginated::new(items, page, limit, total))
}

/// Fetches an article and records the view. The caller sees the counter as
/// it was before this view.
pub fn get_article<R>(repo: &R, article_id: i32) -> ServiceResult<ArticleWithRelations>
where
    R: ArticleReader + ArticleWriter + ?Sized,
{
    let article = repo
        .get_article_by_id(article_id)?
        .ok_or_else(|| ServiceError::NotFound("Article not found".into()))?;

    repo.increment_view_count(article_id)?;

    Ok(article)
}

/// Articles belonging to the category with the given slug.
pub fn list_articles_by_category<R>(
    repo: &R,
    slug: &str,
    page: usize,
    limit: usize,
) -> ServiceResult<Paginated<ArticleWithRelations>>
where
    R: ArticleReader + CategoryReader + ?Sized,
{
    let (category, _) = repo
        .get_category_by_slug(slug)?
        .ok_or_else(|| ServiceError::NotFound("Category not found".into()))?;

    let (total, items) = repo.list_articles(
        ArticleListQuery::new()
            .category(category.id)
            .paginate(page, limit),
    )?;
    Ok(Paginated::new(items, page, limit, total))
}

/// Articles carrying the tag with the given slug.
pub fn list_articles_by_tag<R>(
    repo: &R,
    slug: &str,
    page: usize,
    limit: usize,
) -> ServiceResult<Paginated<ArticleWithRelations>>
where
    R: ArticleReader + TagReader + ?Sized,
{
    let (tag, _) = repo
        .get_tag_by_slug(slug)?
        .ok_or_else(|| ServiceError::NotFound("Tag not found".into()))?;

    let (total, items) =
        repo.list_articles(ArticleListQuery::new().tag(tag.id).paginate(page, limit))?;
    Ok(Paginated::new(items, page, limit, total))
}

fn check_relations<R>(repo: &R, category_id: i32, tag_ids: &[i32]) -> ServiceResult<()>
where
    R: CategoryReader + TagReader + ?Sized,
{
    if repo.get_category_by_id(category_id)?.is_none() {
        return Err(ServiceError::NotFound("Category not found".into()));
    }
    for tag_id in tag_ids {
        if repo.get_tag_by_id(*tag_id)?.is_none() {
            return Err(ServiceError::NotFound(format!("Tag {tag_id} not found")));
        }
    }
    Ok(())
}

/// Creates an article (admin only); category and tags must already exist.
pub fn create_article<R>(
    repo: &R,
    user: &AuthenticatedUser,
    new_article: &NewArticle,
) -> ServiceResult<ArticleWithRelations>
where
    R: ArticleWriter + CategoryReader + TagReader + ?Sized,
{
    ensure_admin(user)?;
    check_relations(repo, new_article.category_id, &new_article.tag_ids)?;
    repo.create_article(new_article).map_err(Into::into)
}

/// Rewrites an article and its tag set (admin only).
pub fn update_article<R>(
    repo: &R,
    user: &AuthenticatedUser,
    article_id: i32,
    updates: &UpdateArticle,
) -> ServiceResult<ArticleWithRelations>
where
    R: ArticleWriter + CategoryReader + TagReader + ?Sized,
{
    ensure_admin(user)?;
    check_relations(repo, updates.category_id, &updates.tag_ids)?;
    repo.update_article(article_id, updates).map_err(Into::into)
}

/// Deletes an article together with its comments and likes (admin only).
pub fn delete_article<R>(
    repo: &R,
    user: &AuthenticatedUser,
    article_id: i32,
) -> ServiceResult<()>
where
    R: ArticleWriter + ?Sized,
{
    ensure_admin(user)?;
    repo.delete_article(article_id).map_err(Into::into)
}
