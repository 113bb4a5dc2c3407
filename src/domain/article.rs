use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::tag::Tag;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub author: String,
    pub publish_date: NaiveDateTime,
    pub view_count: i32,
    pub comment_count: i32,
    pub like_count: i32,
    pub category_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// An article joined with its category and tag rows, the shape every list
/// and detail endpoint serves.
pub type ArticleWithRelations = (Article, Category, Vec<Tag>);

#[derive(Clone, Debug, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub author: String,
    pub publish_date: Option<NaiveDateTime>,
    pub category_id: i32,
    pub tag_ids: Vec<i32>,
}

impl NewArticle {
    #[must_use]
    pub fn new(
        title: String,
        content: String,
        summary: Option<String>,
        author: String,
        publish_date: Option<NaiveDateTime>,
        category_id: i32,
        tag_ids: Vec<i32>,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            content,
            summary: summary
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            author: author.trim().to_string(),
            publish_date,
            category_id,
            tag_ids: dedup_tags(tag_ids),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateArticle {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub author: String,
    pub publish_date: Option<NaiveDateTime>,
    pub category_id: i32,
    pub tag_ids: Vec<i32>,
}

impl UpdateArticle {
    #[must_use]
    pub fn new(
        title: String,
        content: String,
        summary: Option<String>,
        author: String,
        publish_date: Option<NaiveDateTime>,
        category_id: i32,
        tag_ids: Vec<i32>,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            content,
            summary: summary
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            author: author.trim().to_string(),
            publish_date,
            category_id,
            tag_ids: dedup_tags(tag_ids),
        }
    }
}

fn dedup_tags(mut tag_ids: Vec<i32>) -> Vec<i32> {
    tag_ids.sort_unstable();
    tag_ids.dedup();
    tag_ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_article_dedups_tags_and_trims() {
        let article = NewArticle::new(
            "  Title ".into(),
            "body".into(),
            Some("".into()),
            " Jane ".into(),
            None,
            1,
            vec![3, 1, 3, 2, 1],
        );
        assert_eq!(article.title, "Title");
        assert_eq!(article.author, "Jane");
        assert_eq!(article.summary, None);
        assert_eq!(article.tag_ids, vec![1, 2, 3]);
    }
}
