//! Repository implementation for comments.
//!
//! Comment writes keep the denormalized `comment_count` on the article in
//! step with the comment rows inside a single transaction.

use diesel::prelude::*;

use crate::{
    domain::article::Article,
    domain::comment::{Comment, NewComment},
    domain::user::User,
    models::article::Article as DbArticle,
    models::comment::{Comment as DbComment, NewComment as DbNewComment},
    models::user::User as DbUser,
    repository::{
        CommentReader, CommentWriter, DieselRepository, Pagination,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl CommentReader for DieselRepository {
    fn get_comment_by_id(&self, id: i32) -> RepositoryResult<Option<Comment>> {
        use crate::schema::comments;

        let mut conn = self.conn()?;
        let comment = comments::table
            .find(id)
            .select(DbComment::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(comment.map(Into::into))
    }

    fn list_article_comments(
        &self,
        article_id: i32,
        pagination: Option<Pagination>,
    ) -> RepositoryResult<(usize, Vec<(Comment, User)>)> {
        use crate::schema::{comments, users};

        let mut conn = self.conn()?;

        let mut items = comments::table
            .inner_join(users::table)
            .filter(comments::article_id.eq(article_id))
            .order(comments::created_at.desc())
            .select((DbComment::as_select(), DbUser::as_select()))
            .into_boxed();

        if let Some(pagination) = &pagination {
            items = items
                .limit(pagination.per_page as i64)
                .offset(pagination.offset());
        }

        let rows: Vec<(DbComment, DbUser)> = items.load(&mut conn)?;

        let total: i64 = comments::table
            .filter(comments::article_id.eq(article_id))
            .count()
            .get_result(&mut conn)?;

        Ok((
            total as usize,
            rows.into_iter()
                .map(|(comment, user)| (comment.into(), user.into()))
                .collect(),
        ))
    }

    fn list_user_comments(
        &self,
        user_id: i32,
        pagination: Option<Pagination>,
    ) -> RepositoryResult<(usize, Vec<(Comment, Article)>)> {
        use crate::schema::{articles, comments};

        let mut conn = self.conn()?;

        let mut items = comments::table
            .inner_join(articles::table)
            .filter(comments::user_id.eq(user_id))
            .order(comments::created_at.desc())
            .select((DbComment::as_select(), DbArticle::as_select()))
            .into_boxed();

        if let Some(pagination) = &pagination {
            items = items
                .limit(pagination.per_page as i64)
                .offset(pagination.offset());
        }

        let rows: Vec<(DbComment, DbArticle)> = items.load(&mut conn)?;

        let total: i64 = comments::table
            .filter(comments::user_id.eq(user_id))
            .count()
            .get_result(&mut conn)?;

        Ok((
            total as usize,
            rows.into_iter()
                .map(|(comment, article)| (comment.into(), article.into()))
                .collect(),
        ))
    }

    fn list_recent_comments(
        &self,
        pagination: Option<Pagination>,
    ) -> RepositoryResult<(usize, Vec<(Comment, User)>)> {
        use crate::schema::{comments, users};

        let mut conn = self.conn()?;

        let mut items = comments::table
            .inner_join(users::table)
            .order(comments::created_at.desc())
            .select((DbComment::as_select(), DbUser::as_select()))
            .into_boxed();

        if let Some(pagination) = &pagination {
            items = items
                .limit(pagination.per_page as i64)
                .offset(pagination.offset());
        }

        let rows: Vec<(DbComment, DbUser)> = items.load(&mut conn)?;
        let total: i64 = comments::table.count().get_result(&mut conn)?;

        Ok((
            total as usize,
            rows.into_iter()
                .map(|(comment, user)| (comment.into(), user.into()))
                .collect(),
        ))
    }
}

impl CommentWriter for DieselRepository {
    fn create_comment(&self, new_comment: &NewComment) -> RepositoryResult<Comment> {
        use crate::schema::{articles, comments};

        let mut conn = self.conn()?;
        let row: DbNewComment = new_comment.into();

        let comment = conn.transaction::<DbComment, diesel::result::Error, _>(|conn| {
            let comment: DbComment = diesel::insert_into(comments::table)
                .values(&row)
                .get_result(conn)?;

            diesel::update(articles::table.find(new_comment.article_id))
                .set(articles::comment_count.eq(articles::comment_count + 1))
                .execute(conn)?;

            Ok(comment)
        })?;

        Ok(comment.into())
    }

    fn delete_comment(&self, comment_id: i32) -> RepositoryResult<()> {
        use crate::schema::{articles, comments};

        let mut conn = self.conn()?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let article_id: i32 = comments::table
                .find(comment_id)
                .select(comments::article_id)
                .first(conn)?;

            diesel::delete(comments::table.find(comment_id)).execute(conn)?;

            diesel::update(articles::table.find(article_id))
                .set(articles::comment_count.eq(articles::comment_count - 1))
                .execute(conn)?;

            Ok(())
        })
        .map_err(RepositoryError::from)
    }
}
