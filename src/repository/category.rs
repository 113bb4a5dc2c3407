//! Repository implementation for blog categories.

use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::category::{Category, NewCategory, UpdateCategory},
    models::category::{
        Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
    },
    repository::{
        CategoryReader, CategoryWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let category = categories::table
            .find(id)
            .select(DbCategory::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(category.map(Into::into))
    }

    fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<(Category, usize)>> {
        use crate::schema::{articles, categories};

        let mut conn = self.conn()?;
        let category: Option<DbCategory> = categories::table
            .filter(categories::slug.eq(slug))
            .select(DbCategory::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(category) = category else {
            return Ok(None);
        };

        let article_count: i64 = articles::table
            .filter(articles::category_id.eq(category.id))
            .count()
            .get_result(&mut conn)?;

        Ok(Some((category.into(), article_count as usize)))
    }

    fn list_categories(&self) -> RepositoryResult<Vec<(Category, usize)>> {
        use crate::schema::{articles, categories};

        let mut conn = self.conn()?;

        let rows: Vec<DbCategory> = categories::table
            .order(categories::name.asc())
            .select(DbCategory::as_select())
            .load(&mut conn)?;

        let counts: HashMap<i32, i64> = articles::table
            .group_by(articles::category_id)
            .select((articles::category_id, diesel::dsl::count_star()))
            .load::<(i32, i64)>(&mut conn)?
            .into_iter()
            .collect();

        Ok(rows
            .into_iter()
            .map(|category| {
                let count = counts.get(&category.id).copied().unwrap_or(0) as usize;
                (category.into(), count)
            })
            .collect())
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let row: DbNewCategory = new_category.into();

        let category: DbCategory = diesel::insert_into(categories::table)
            .values(&row)
            .get_result(&mut conn)?;

        Ok(category.into())
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let row: DbUpdateCategory = updates.into();

        let category: DbCategory = diesel::update(categories::table.find(category_id))
            .set(&row)
            .get_result(&mut conn)?;

        Ok(category.into())
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let affected = diesel::delete(categories::table.find(category_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
