use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::tag::{
    NewTag as DomainNewTag, Tag as DomainTag, UpdateTag as DomainUpdateTag,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::tags)]
/// Diesel model for [`crate::domain::tag::Tag`].
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tags)]
pub struct NewTag<'a> {
    pub name: &'a str,
    pub slug: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::tags)]
pub struct UpdateTag<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Tag> for DomainTag {
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

impl<'a> From<&'a DomainNewTag> for NewTag<'a> {
    fn from(tag: &'a DomainNewTag) -> Self {
        Self {
            name: tag.name.as_str(),
            slug: tag.slug.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateTag> for UpdateTag<'a> {
    fn from(tag: &'a DomainUpdateTag) -> Self {
        Self {
            name: tag.name.as_str(),
            slug: tag.slug.as_str(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
