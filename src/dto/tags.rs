use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::tag::Tag;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Tag with its computed article count, as served by the tag endpoints.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TagWithCountDto {
    #[serde(flatten)]
    pub tag: TagDto,
    pub article_count: usize,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            slug: tag.slug,
            created_at: tag.created_at,
            updated_at: tag.updated_at,
        }
    }
}

impl From<(Tag, usize)> for TagWithCountDto {
    fn from((tag, article_count): (Tag, usize)) -> Self {
        Self {
            tag: tag.into(),
            article_count,
        }
    }
}
