use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Like {
    pub id: i32,
    pub user_id: i32,
    pub article_id: i32,
    pub created_at: NaiveDateTime,
}

/// Outcome of a like toggle: whether the like now exists and the article's
/// counter after the change.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct LikeToggle {
    pub liked: bool,
    pub like_count: i32,
}
