use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::article::{NewArticle, UpdateArticle};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for creating or replacing an article. Used by the admin UI.
pub struct ArticleForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    pub summary: Option<String>,
    #[validate(length(min = 1))]
    pub author: String,
    /// Defaults to the time of creation when omitted.
    pub publish_date: Option<NaiveDateTime>,
    pub category_id: i32,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
}

impl From<&ArticleForm> for NewArticle {
    fn from(form: &ArticleForm) -> Self {
        NewArticle::new(
            form.title.clone(),
            form.content.clone(),
            form.summary.clone(),
            form.author.clone(),
            form.publish_date,
            form.category_id,
            form.tag_ids.clone(),
        )
    }
}

impl From<&ArticleForm> for UpdateArticle {
    fn from(form: &ArticleForm) -> Self {
        UpdateArticle::new(
            form.title.clone(),
            form.content.clone(),
            form.summary.clone(),
            form.author.clone(),
            form.publish_date,
            form.category_id,
            form.tag_ids.clone(),
        )
    }
}
