use crate::{
    db::{DbConnection, DbPool},
    domain::{
        article::{ArticleWithRelations, NewArticle, UpdateArticle},
        category::{Category, NewCategory, UpdateCategory},
        comment::{Comment, NewComment},
        like::LikeToggle,
        tag::{NewTag, Tag, UpdateTag},
        user::{NewUser, UpdateProfile, User},
    },
    repository::errors::RepositoryResult,
};

pub mod article;
pub mod category;
pub mod comment;
pub mod errors;
pub mod like;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod tag;
pub mod user;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// SQL offset for this page, treating page 0 as page 1.
    pub fn offset(&self) -> i64 {
        let page = if self.page == 0 { 1 } else { self.page };
        ((page - 1) * self.per_page) as i64
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArticleListQuery {
    pub category_id: Option<i32>,
    pub tag_id: Option<i32>,
    pub pagination: Option<Pagination>,
}

impl ArticleListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn tag(mut self, tag_id: i32) -> Self {
        self.tag_id = Some(tag_id);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ArticleReader {
    fn get_article_by_id(&self, id: i32) -> RepositoryResult<Option<ArticleWithRelations>>;
    fn list_articles(
        &self,
        query: ArticleListQuery,
    ) -> RepositoryResult<(usize, Vec<ArticleWithRelations>)>;
}

pub trait ArticleWriter {
    fn create_article(&self, new_article: &NewArticle) -> RepositoryResult<ArticleWithRelations>;
    fn update_article(
        &self,
        article_id: i32,
        updates: &UpdateArticle,
    ) -> RepositoryResult<ArticleWithRelations>;
    fn delete_article(&self, article_id: i32) -> RepositoryResult<()>;
    fn increment_view_count(&self, article_id: i32) -> RepositoryResult<()>;
}

pub trait CategoryReader {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
    fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<(Category, usize)>>;
    fn list_categories(&self) -> RepositoryResult<Vec<(Category, usize)>>;
}

pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

pub trait TagReader {
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>>;
    fn get_tag_by_slug(&self, slug: &str) -> RepositoryResult<Option<(Tag, usize)>>;
    fn list_tags(&self) -> RepositoryResult<Vec<(Tag, usize)>>;
}

pub trait TagWriter {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()>;
}

pub trait CommentReader {
    fn get_comment_by_id(&self, id: i32) -> RepositoryResult<Option<Comment>>;
    fn list_article_comments(
        &self,
        article_id: i32,
        pagination: Option<Pagination>,
    ) -> RepositoryResult<(usize, Vec<(Comment, User)>)>;
    fn list_user_comments(
        &self,
        user_id: i32,
        pagination: Option<Pagination>,
    ) -> RepositoryResult<(usize, Vec<(Comment, crate::domain::article::Article)>)>;
    fn list_recent_comments(
        &self,
        pagination: Option<Pagination>,
    ) -> RepositoryResult<(usize, Vec<(Comment, User)>)>;
}

pub trait CommentWriter {
    /// Inserts the comment and bumps the article's comment counter in one
    /// transaction.
    fn create_comment(&self, new_comment: &NewComment) -> RepositoryResult<Comment>;
    /// Deletes the comment and decrements the counter in one transaction.
    fn delete_comment(&self, comment_id: i32) -> RepositoryResult<()>;
}

pub trait LikeReader {
    fn user_liked(&self, user_id: i32, article_id: i32) -> RepositoryResult<bool>;
    fn like_count(&self, article_id: i32) -> RepositoryResult<usize>;
    fn list_liked_articles(
        &self,
        user_id: i32,
        pagination: Option<Pagination>,
    ) -> RepositoryResult<(usize, Vec<ArticleWithRelations>)>;
}

pub trait LikeWriter {
    /// Inserts or removes the like row and moves the article counter with it,
    /// all inside one transaction.
    fn toggle_like(&self, user_id: i32, article_id: i32) -> RepositoryResult<LikeToggle>;
}

pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user_profile(&self, user_id: i32, updates: &UpdateProfile)
    -> RepositoryResult<User>;
    fn set_user_password(&self, user_id: i32, password_hash: &str) -> RepositoryResult<()>;
    fn set_user_avatar(&self, user_id: i32, avatar_url: &str) -> RepositoryResult<User>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        self.pool.get().map_err(Into::into)
    }
}
