//! Repository implementation for article likes.
//!
//! A toggle is one transaction: the like row appears or disappears and the
//! article's `like_count` moves with it, so the counter can never drift.

use diesel::prelude::*;

use crate::{
    domain::article::ArticleWithRelations,
    domain::like::LikeToggle,
    models::article::Article as DbArticle,
    models::category::Category as DbCategory,
    models::like::NewLike as DbNewLike,
    repository::{
        DieselRepository, LikeReader, LikeWriter, Pagination, errors::RepositoryResult,
    },
};

impl LikeReader for DieselRepository {
    fn user_liked(&self, user_id: i32, article_id: i32) -> RepositoryResult<bool> {
        use crate::schema::likes;

        let mut conn = self.conn()?;

        let found: Option<i32> = likes::table
            .filter(likes::user_id.eq(user_id))
            .filter(likes::article_id.eq(article_id))
            .select(likes::id)
            .first(&mut conn)
            .optional()?;

        Ok(found.is_some())
    }

    fn like_count(&self, article_id: i32) -> RepositoryResult<usize> {
        use crate::schema::likes;

        let mut conn = self.conn()?;

        let total: i64 = likes::table
            .filter(likes::article_id.eq(article_id))
            .count()
            .get_result(&mut conn)?;

        Ok(total as usize)
    }

    fn list_liked_articles(
        &self,
        user_id: i32,
        pagination: Option<Pagination>,
    ) -> RepositoryResult<(usize, Vec<ArticleWithRelations>)> {
        use crate::schema::{articles, categories, likes};

        let mut conn = self.conn()?;

        let mut items = likes::table
            .filter(likes::user_id.eq(user_id))
            .inner_join(articles::table.inner_join(categories::table))
            .order(likes::created_at.desc())
            .select((DbArticle::as_select(), DbCategory::as_select()))
            .into_boxed();

        if let Some(pagination) = &pagination {
            items = items
                .limit(pagination.per_page as i64)
                .offset(pagination.offset());
        }

        let rows: Vec<(DbArticle, DbCategory)> = items.load(&mut conn)?;

        let total: i64 = likes::table
            .filter(likes::user_id.eq(user_id))
            .count()
            .get_result(&mut conn)?;

        let articles = super::article::with_relations(&mut conn, rows)?;
        Ok((total as usize, articles))
    }
}

impl LikeWriter for DieselRepository {
    fn toggle_like(&self, user_id: i32, article_id: i32) -> RepositoryResult<LikeToggle> {
        use crate::schema::{articles, likes};

        let mut conn = self.conn()?;

        conn.transaction::<LikeToggle, diesel::result::Error, _>(|conn| {
            let existing: Option<i32> = likes::table
                .filter(likes::user_id.eq(user_id))
                .filter(likes::article_id.eq(article_id))
                .select(likes::id)
                .first(conn)
                .optional()?;

            match existing {
                Some(like_id) => {
                    diesel::delete(likes::table.find(like_id)).execute(conn)?;
                    diesel::update(articles::table.find(article_id))
                        .set(articles::like_count.eq(articles::like_count - 1))
                        .execute(conn)?;
                }
                None => {
                    diesel::insert_into(likes::table)
                        .values(&DbNewLike {
                            user_id,
                            article_id,
                        })
                        .execute(conn)?;
                    diesel::update(articles::table.find(article_id))
                        .set(articles::like_count.eq(articles::like_count + 1))
                        .execute(conn)?;
                }
            }

            let like_count: i32 = articles::table
                .find(article_id)
                .select(articles::like_count)
                .first(conn)?;

            Ok(LikeToggle {
                liked: existing.is_none(),
                like_count,
            })
        })
        .map_err(Into::into)
    }
}
