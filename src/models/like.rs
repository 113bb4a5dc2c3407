use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::like::Like as DomainLike;
use crate::models::article::Article;
use crate::models::user::User;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Article, foreign_key = article_id))]
#[diesel(belongs_to(User, foreign_key = user_id))]
#[diesel(table_name = crate::schema::likes)]
pub struct Like {
    pub id: i32,
    pub user_id: i32,
    pub article_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::likes)]
pub struct NewLike {
    pub user_id: i32,
    pub article_id: i32,
}

impl From<Like> for DomainLike {
    fn from(like: Like) -> Self {
        Self {
            id: like.id,
            user_id: like.user_id,
            article_id: like.article_id,
            created_at: like.created_at,
        }
    }
}
