//! Repository implementation for articles and their tag relations.

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::article::{ArticleWithRelations, NewArticle, UpdateArticle},
    domain::tag::Tag,
    models::article::{
        Article as DbArticle, ArticleTag as DbArticleTag, NewArticle as DbNewArticle,
        UpdateArticle as DbUpdateArticle,
    },
    models::category::Category as DbCategory,
    models::tag::Tag as DbTag,
    repository::{
        ArticleListQuery, ArticleReader, ArticleWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

/// Loads the tag lists for a batch of articles, preserving article order.
fn load_tags_for(
    conn: &mut SqliteConnection,
    db_articles: &[DbArticle],
) -> Result<Vec<Vec<Tag>>, diesel::result::Error> {
    use crate::schema::tags;

    let rows: Vec<(DbArticleTag, DbTag)> = DbArticleTag::belonging_to(db_articles)
        .inner_join(tags::table)
        .select((DbArticleTag::as_select(), DbTag::as_select()))
        .load(conn)?;

    Ok(rows
        .grouped_by(db_articles)
        .into_iter()
        .map(|group| group.into_iter().map(|(_, tag)| tag.into()).collect())
        .collect())
}

pub(super) fn with_relations(
    conn: &mut SqliteConnection,
    rows: Vec<(DbArticle, DbCategory)>,
) -> Result<Vec<ArticleWithRelations>, diesel::result::Error> {
    let db_articles: Vec<DbArticle> = rows.iter().map(|(article, _)| article.clone()).collect();
    let tags = load_tags_for(conn, &db_articles)?;

    Ok(rows
        .into_iter()
        .zip(tags)
        .map(|((article, category), tags)| (article.into(), category.into(), tags))
        .collect())
}

impl ArticleReader for DieselRepository {
    fn get_article_by_id(&self, id: i32) -> RepositoryResult<Option<ArticleWithRelations>> {
        use crate::schema::{articles, categories};

        let mut conn = self.conn()?;

        let row: Option<(DbArticle, DbCategory)> = articles::table
            .inner_join(categories::table)
            .filter(articles::id.eq(id))
            .select((DbArticle::as_select(), DbCategory::as_select()))
            .first(&mut conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(with_relations(&mut conn, vec![row])?.pop())
    }

    fn list_articles(
        &self,
        query: ArticleListQuery,
    ) -> RepositoryResult<(usize, Vec<ArticleWithRelations>)> {
        use crate::schema::{article_tags, articles, categories};

        let mut conn = self.conn()?;

        let mut items = articles::table
            .inner_join(categories::table)
            .select((DbArticle::as_select(), DbCategory::as_select()))
            .order(articles::publish_date.desc())
            .into_boxed();
        let mut total = articles::table
            .select(diesel::dsl::count_star())
            .into_boxed();

        if let Some(category_id) = query.category_id {
            items = items.filter(articles::category_id.eq(category_id));
            total = total.filter(articles::category_id.eq(category_id));
        }
        if let Some(tag_id) = query.tag_id {
            let tagged = article_tags::table
                .filter(article_tags::tag_id.eq(tag_id))
                .select(article_tags::article_id);
            items = items.filter(articles::id.eq_any(tagged));

            let tagged = article_tags::table
                .filter(article_tags::tag_id.eq(tag_id))
                .select(article_tags::article_id);
            total = total.filter(articles::id.eq_any(tagged));
        }
        if let Some(pagination) = &query.pagination {
            items = items
                .limit(pagination.per_page as i64)
                .offset(pagination.offset());
        }

        let rows: Vec<(DbArticle, DbCategory)> = items.load(&mut conn)?;
        let total: i64 = total.first(&mut conn)?;

        let articles = with_relations(&mut conn, rows)?;
        Ok((total as usize, articles))
    }
}

impl ArticleWriter for DieselRepository {
    fn create_article(&self, new_article: &NewArticle) -> RepositoryResult<ArticleWithRelations> {
        use crate::schema::{article_tags, articles};

        let mut conn = self.conn()?;
        let row = DbNewArticle::from_domain(new_article, Utc::now().naive_utc());

        let article_id = conn.transaction::<i32, diesel::result::Error, _>(|conn| {
            let article: DbArticle = diesel::insert_into(articles::table)
                .values(&row)
                .get_result(conn)?;

            let joins: Vec<DbArticleTag> = new_article
                .tag_ids
                .iter()
                .map(|tag_id| DbArticleTag {
                    article_id: article.id,
                    tag_id: *tag_id,
                })
                .collect();
            if !joins.is_empty() {
                diesel::insert_into(article_tags::table)
                    .values(&joins)
                    .execute(conn)?;
            }

            Ok(article.id)
        })?;

        drop(conn);
        self.get_article_by_id(article_id)?
            .ok_or(RepositoryError::NotFound)
    }

    fn update_article(
        &self,
        article_id: i32,
        updates: &UpdateArticle,
    ) -> RepositoryResult<ArticleWithRelations> {
        use crate::schema::{article_tags, articles};

        let mut conn = self.conn()?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let current_publish_date: chrono::NaiveDateTime = articles::table
                .find(article_id)
                .select(articles::publish_date)
                .first(conn)?;

            let row = DbUpdateArticle {
                title: updates.title.as_str(),
                content: updates.content.as_str(),
                summary: updates.summary.as_deref(),
                author: updates.author.as_str(),
                publish_date: updates.publish_date.unwrap_or(current_publish_date),
                category_id: updates.category_id,
                updated_at: Utc::now().naive_utc(),
            };

            diesel::update(articles::table.find(article_id))
                .set(&row)
                .execute(conn)?;

            diesel::delete(article_tags::table.filter(article_tags::article_id.eq(article_id)))
                .execute(conn)?;
            let joins: Vec<DbArticleTag> = updates
                .tag_ids
                .iter()
                .map(|tag_id| DbArticleTag {
                    article_id,
                    tag_id: *tag_id,
                })
                .collect();
            if !joins.is_empty() {
                diesel::insert_into(article_tags::table)
                    .values(&joins)
                    .execute(conn)?;
            }

            Ok(())
        })?;

        drop(conn);
        self.get_article_by_id(article_id)?
            .ok_or(RepositoryError::NotFound)
    }

    fn delete_article(&self, article_id: i32) -> RepositoryResult<()> {
        use crate::schema::articles;

        let mut conn = self.conn()?;

        // Comments, likes and tag joins cascade via foreign keys.
        let affected = diesel::delete(articles::table.find(article_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn increment_view_count(&self, article_id: i32) -> RepositoryResult<()> {
        use crate::schema::articles;

        let mut conn = self.conn()?;

        diesel::update(articles::table.find(article_id))
            .set(articles::view_count.eq(articles::view_count + 1))
            .execute(&mut conn)?;
        Ok(())
    }
}
