//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::article::{Article, ArticleWithRelations, NewArticle, UpdateArticle};
use crate::domain::category::{Category, NewCategory, UpdateCategory};
use crate::domain::comment::{Comment, NewComment};
use crate::domain::like::LikeToggle;
use crate::domain::tag::{NewTag, Tag, UpdateTag};
use crate::domain::user::{NewUser, UpdateProfile, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ArticleListQuery, ArticleReader, ArticleWriter, CategoryReader, CategoryWriter, CommentReader,
    CommentWriter, LikeReader, LikeWriter, Pagination, TagReader, TagWriter, UserReader,
    UserWriter,
};

mock! {
    pub Repository {}

    impl ArticleReader for Repository {
        fn get_article_by_id(&self, id: i32) -> RepositoryResult<Option<ArticleWithRelations>>;
        fn list_articles(
            &self,
            query: ArticleListQuery,
        ) -> RepositoryResult<(usize, Vec<ArticleWithRelations>)>;
    }

    impl ArticleWriter for Repository {
        fn create_article(&self, new_article: &NewArticle) -> RepositoryResult<ArticleWithRelations>;
        fn update_article(
            &self,
            article_id: i32,
            updates: &UpdateArticle,
        ) -> RepositoryResult<ArticleWithRelations>;
        fn delete_article(&self, article_id: i32) -> RepositoryResult<()>;
        fn increment_view_count(&self, article_id: i32) -> RepositoryResult<()>;
    }

    impl CategoryReader for Repository {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
        fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<(Category, usize)>>;
        fn list_categories(&self) -> RepositoryResult<Vec<(Category, usize)>>;
    }

    impl CategoryWriter for Repository {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(
            &self,
            category_id: i32,
            updates: &UpdateCategory,
        ) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }

    impl TagReader for Repository {
        fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>>;
        fn get_tag_by_slug(&self, slug: &str) -> RepositoryResult<Option<(Tag, usize)>>;
        fn list_tags(&self) -> RepositoryResult<Vec<(Tag, usize)>>;
    }

    impl TagWriter for Repository {
        fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
        fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
        fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()>;
    }

    impl CommentReader for Repository {
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
        ) -> RepositoryResult<(usize, Vec<(Comment, Article)>)>;
        fn list_recent_comments(
            &self,
            pagination: Option<Pagination>,
        ) -> RepositoryResult<(usize, Vec<(Comment, User)>)>;
    }

    impl CommentWriter for Repository {
        fn create_comment(&self, new_comment: &NewComment) -> RepositoryResult<Comment>;
        fn delete_comment(&self, comment_id: i32) -> RepositoryResult<()>;
    }

    impl LikeReader for Repository {
        fn user_liked(&self, user_id: i32, article_id: i32) -> RepositoryResult<bool>;
        fn like_count(&self, article_id: i32) -> RepositoryResult<usize>;
        fn list_liked_articles(
            &self,
            user_id: i32,
            pagination: Option<Pagination>,
        ) -> RepositoryResult<(usize, Vec<ArticleWithRelations>)>;
    }

    impl LikeWriter for Repository {
        fn toggle_like(&self, user_id: i32, article_id: i32) -> RepositoryResult<LikeToggle>;
    }

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn update_user_profile(&self, user_id: i32, updates: &UpdateProfile) -> RepositoryResult<User>;
        fn set_user_password(&self, user_id: i32, password_hash: &str) -> RepositoryResult<()>;
        fn set_user_avatar(&self, user_id: i32, avatar_url: &str) -> RepositoryResult<User>;
    }
}
