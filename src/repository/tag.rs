//! Repository implementation for blog tags.

use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::tag::{NewTag, Tag, UpdateTag},
    models::tag::{NewTag as DbNewTag, Tag as DbTag, UpdateTag as DbUpdateTag},
    repository::{
        DieselRepository, TagReader, TagWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl TagReader for DieselRepository {
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let tag = tags::table
            .find(id)
            .select(DbTag::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(tag.map(Into::into))
    }

    fn get_tag_by_slug(&self, slug: &str) -> RepositoryResult<Option<(Tag, usize)>> {
        use crate::schema::{article_tags, tags};

        let mut conn = self.conn()?;
        let tag: Option<DbTag> = tags::table
            .filter(tags::slug.eq(slug))
            .select(DbTag::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(tag) = tag else {
            return Ok(None);
        };

        let article_count: i64 = article_tags::table
            .filter(article_tags::tag_id.eq(tag.id))
            .count()
            .get_result(&mut conn)?;

        Ok(Some((tag.into(), article_count as usize)))
    }

    fn list_tags(&self) -> RepositoryResult<Vec<(Tag, usize)>> {
        use crate::schema::{article_tags, tags};

        let mut conn = self.conn()?;

        let rows: Vec<DbTag> = tags::table
            .order(tags::name.asc())
            .select(DbTag::as_select())
            .load(&mut conn)?;

        let counts: HashMap<i32, i64> = article_tags::table
            .group_by(article_tags::tag_id)
            .select((article_tags::tag_id, diesel::dsl::count_star()))
            .load::<(i32, i64)>(&mut conn)?
            .into_iter()
            .collect();

        Ok(rows
            .into_iter()
            .map(|tag| {
                let count = counts.get(&tag.id).copied().unwrap_or(0) as usize;
                (tag.into(), count)
            })
            .collect())
    }
}

impl TagWriter for DieselRepository {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let row: DbNewTag = new_tag.into();

        let tag: DbTag = diesel::insert_into(tags::table)
            .values(&row)
            .get_result(&mut conn)?;

        Ok(tag.into())
    }

    fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let row: DbUpdateTag = updates.into();

        let tag: DbTag = diesel::update(tags::table.find(tag_id))
            .set(&row)
            .get_result(&mut conn)?;

        Ok(tag.into())
    }

    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let affected = diesel::delete(tags::table.find(tag_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
