use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
    pub article_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewComment {
    pub content: String,
    pub user_id: i32,
    pub article_id: i32,
}

impl NewComment {
    /// Builds a comment, stripping markup the sanitizer rejects.
    #[must_use]
    pub fn new(content: String, user_id: i32, article_id: i32) -> Self {
        Self {
            content: ammonia::clean(content.trim()),
            user_id,
            article_id,
        }
    }
}
