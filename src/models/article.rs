use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::article::{Article as DomainArticle, NewArticle as DomainNewArticle};
use crate::models::tag::Tag;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::articles)]
/// Diesel model for [`crate::domain::article::Article`].
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::articles)]
/// Insertable form of [`Article`]. Counters start at their column defaults.
pub struct NewArticle<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub summary: Option<&'a str>,
    pub author: &'a str,
    pub publish_date: NaiveDateTime,
    pub category_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::articles)]
/// Data used when updating an [`Article`] record. Counter columns are
/// deliberately absent; they move only through their dedicated queries.
pub struct UpdateArticle<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub summary: Option<&'a str>,
    pub author: &'a str,
    pub publish_date: NaiveDateTime,
    pub category_id: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations, Insertable)]
#[diesel(table_name = crate::schema::article_tags)]
#[diesel(belongs_to(Article, foreign_key = article_id))]
#[diesel(belongs_to(Tag, foreign_key = tag_id))]
#[diesel(primary_key(article_id, tag_id))]
/// Join row linking an article to a tag.
pub struct ArticleTag {
    pub article_id: i32,
    pub tag_id: i32,
}

impl From<Article> for DomainArticle {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            summary: article.summary,
            author: article.author,
            publish_date: article.publish_date,
            view_count: article.view_count,
            comment_count: article.comment_count,
            like_count: article.like_count,
            category_id: article.category_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl<'a> NewArticle<'a> {
    /// Builds the insertable row, defaulting the publish date to `now`.
    pub fn from_domain(article: &'a DomainNewArticle, now: NaiveDateTime) -> Self {
        Self {
            title: article.title.as_str(),
            content: article.content.as_str(),
            summary: article.summary.as_deref(),
            author: article.author.as_str(),
            publish_date: article.publish_date.unwrap_or(now),
            category_id: article.category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn from_domain_defaults_publish_date() {
        let now = Utc::now().naive_utc();
        let domain = DomainNewArticle::new(
            "Title".into(),
            "content".into(),
            None,
            "Jane".into(),
            None,
            3,
            vec![],
        );
        let row = NewArticle::from_domain(&domain, now);
        assert_eq!(row.publish_date, now);
        assert_eq!(row.category_id, 3);
    }

    #[test]
    fn article_into_domain_keeps_counters() {
        let now = Utc::now().naive_utc();
        let db_article = Article {
            id: 1,
            title: "t".into(),
            content: "c".into(),
            summary: None,
            author: "a".into(),
            publish_date: now,
            view_count: 4,
            comment_count: 2,
            like_count: 9,
            category_id: 1,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainArticle = db_article.into();
        assert_eq!(domain.view_count, 4);
        assert_eq!(domain.comment_count, 2);
        assert_eq!(domain.like_count, 9);
    }
}
