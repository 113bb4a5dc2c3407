use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::comment::{Comment as DomainComment, NewComment as DomainNewComment};
use crate::models::article::Article;
use crate::models::user::User;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Article, foreign_key = article_id))]
#[diesel(belongs_to(User, foreign_key = user_id))]
#[diesel(table_name = crate::schema::comments)]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
    pub article_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewComment<'a> {
    pub content: &'a str,
    pub user_id: i32,
    pub article_id: i32,
}

impl From<Comment> for DomainComment {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            user_id: comment.user_id,
            article_id: comment.article_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewComment> for NewComment<'a> {
    fn from(comment: &'a DomainNewComment) -> Self {
        Self {
            content: comment.content.as_str(),
            user_id: comment.user_id,
            article_id: comment.article_id,
        }
    }
}
