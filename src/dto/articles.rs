use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::article::ArticleWithRelations;
use crate::dto::categories::CategoryDto;
use crate::dto::tags::TagDto;
use crate::pagination::Paginated;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
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
    pub category: CategoryDto,
    pub tags: Vec<TagDto>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Page of articles with the offset arithmetic the front end renders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArticleListDto {
    pub articles: Vec<ArticleDto>,
    pub pagination: PaginationDto,
}

impl From<ArticleWithRelations> for ArticleDto {
    fn from((article, category, tags): ArticleWithRelations) -> Self {
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
            category: category.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Paginated<ArticleWithRelations>> for ArticleListDto {
    fn from(page: Paginated<ArticleWithRelations>) -> Self {
        Self {
            pagination: PaginationDto {
                page: page.page,
                limit: page.limit,
                total: page.total,
                total_pages: page.total_pages,
            },
            articles: page.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::Article;
    use crate::domain::category::Category;
    use crate::domain::tag::Tag;

    #[test]
    fn serializes_camel_case_with_relations() {
        let dto: ArticleDto = (
            Article::default(),
            Category::default(),
            vec![Tag::default()],
        )
            .into();
        let json = serde_json::to_value(&dto).unwrap();

        assert!(json.get("viewCount").is_some());
        assert!(json.get("publishDate").is_some());
        assert!(json.get("categoryId").is_some());
        assert_eq!(json["tags"].as_array().unwrap().len(), 1);
        assert!(json.get("view_count").is_none());
    }
}
