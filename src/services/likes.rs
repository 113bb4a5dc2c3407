use crate::domain::article::ArticleWithRelations;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::like::LikeToggle;
use crate::pagination::Paginated;
use crate::repository::{ArticleReader, LikeReader, LikeWriter, Pagination};
use crate::services::{ServiceError, ServiceResult};

/// Likes the article if the user hasn't, unlikes it if they have.
pub fn toggle_like<R>(
    repo: &R,
    user: &AuthenticatedUser,
    article_id: i32,
) -> ServiceResult<LikeToggle>
where
    R: ArticleReader + LikeWriter + ?Sized,
{
    if repo.get_article_by_id(article_id)?.is_none() {
        return Err(ServiceError::NotFound("Article not found".into()));
    }

    repo.toggle_like(user.sub, article_id).map_err(Into::into)
}

pub fn user_liked<R>(
    repo: &R,
    user: &AuthenticatedUser,
    article_id: i32,
) -> ServiceResult<bool>
where
    R: LikeReader + ?Sized,
{
    repo.user_liked(user.sub, article_id).map_err(Into::into)
}

pub fn like_count<R>(repo: &R, article_id: i32) -> ServiceResult<usize>
where
    R: LikeReader + ?Sized,
{
    repo.like_count(article_id).map_err(Into::into)
}

/// Articles the user has liked, most recently liked first.
pub fn list_liked_articles<R>(
    repo: &R,
    user: &AuthenticatedUser,
    page: usize,
    limit: usize,
) -> ServiceResult<Paginated<ArticleWithRelations>>
where
    R: LikeReader + ?Sized,
{
    let (total, items) =
        repo.list_liked_articles(user.sub, Some(Pagination { page, per_page: limit }))?;
    Ok(Paginated::new(items, page, limit, total))
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::user::UserRole;
    use crate::repository::mock::MockRepository;

    fn reader() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: 3,
            email: "reader@example.com".into(),
            role: UserRole::User,
            exp: i64::MAX,
        }
    }

    #[test]
    fn toggle_checks_article_first() {
        let mut repo = MockRepository::new();
        repo.expect_get_article_by_id().returning(|_| Ok(None));
        repo.expect_toggle_like().times(0);

        assert!(matches!(
            toggle_like(&repo, &reader(), 4),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut repo = MockRepository::new();
        repo.expect_get_article_by_id()
            .returning(|_| Ok(Some(Default::default())));
        repo.expect_toggle_like()
            .with(eq(3), eq(4))
            .returning(|_, _| {
                Ok(LikeToggle {
                    liked: true,
                    like_count: 11,
                })
            });

        let toggle = toggle_like(&repo, &reader(), 4).unwrap();
        assert!(toggle.liked);
        assert_eq!(toggle.like_count, 11);
    }
}
