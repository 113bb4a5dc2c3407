use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::article::Article;
use crate::domain::comment::Comment;
use crate::domain::user::User;
use crate::pagination::Paginated;

/// The commenting user, reduced to what the comment list shows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommentUserDto {
    pub id: i32,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
    pub article_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub user: CommentUserDto,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommentListDto {
    pub comments: Vec<CommentDto>,
    pub total: usize,
}

/// A freshly created comment, before any user join is available.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreatedDto {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
    pub article_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Comment> for CommentCreatedDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            user_id: comment.user_id,
            article_id: comment.article_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// The article a comment belongs to, as shown in "my comments" listings.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArticleRefDto {
    pub id: i32,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserCommentDto {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
    pub article_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub article: ArticleRefDto,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserCommentListDto {
    pub comments: Vec<UserCommentDto>,
    pub total: usize,
}

impl From<(Comment, User)> for CommentDto {
    fn from((comment, user): (Comment, User)) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            user_id: comment.user_id,
            article_id: comment.article_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            user: CommentUserDto {
                id: user.id,
                nickname: user.nickname,
                avatar: user.avatar,
            },
        }
    }
}

impl From<Paginated<(Comment, User)>> for CommentListDto {
    fn from(page: Paginated<(Comment, User)>) -> Self {
        Self {
            total: page.total,
            comments: page.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<(Comment, Article)> for UserCommentDto {
    fn from((comment, article): (Comment, Article)) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            user_id: comment.user_id,
            article_id: comment.article_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            article: ArticleRefDto {
                id: article.id,
                title: article.title,
            },
        }
    }
}

impl From<Paginated<(Comment, Article)>> for UserCommentListDto {
    fn from(page: Paginated<(Comment, Article)>) -> Self {
        Self {
            total: page.total,
            comments: page.items.into_iter().map(Into::into).collect(),
        }
    }
}
