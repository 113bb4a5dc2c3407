//! Content-authoring endpoints consumed by the admin UI. Every handler
//! requires an admin token; the service layer enforces the role.

use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use log::error;
use serde_json::json;
use validator::Validate;

use crate::domain::article::{NewArticle, UpdateArticle};
use crate::domain::auth::AuthenticatedUser;
use crate::domain::category::{NewCategory, UpdateCategory};
use crate::domain::tag::{NewTag, UpdateTag};
use crate::dto::articles::ArticleDto;
use crate::dto::categories::CategoryDto;
use crate::dto::comments::CommentListDto;
use crate::dto::tags::TagDto;
use crate::forms::articles::ArticleForm;
use crate::forms::categories::CategoryForm;
use crate::forms::tags::TagForm;
use crate::pagination::DEFAULT_COMMENTS_PER_PAGE;
use crate::repository::DieselRepository;
use crate::routes::uploads::{ImageUploadForm, is_image, save_image};
use crate::routes::{PageQuery, error_response, validation_error};
use crate::services::articles as article_services;
use crate::services::categories as category_services;
use crate::services::comments as comment_services;
use crate::services::tags as tag_services;

#[post("/articles")]
pub async fn create_article(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ArticleForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error(&e);
    }

    let new_article = NewArticle::from(&form);
    match article_services::create_article(repo.get_ref(), &user, &new_article) {
        Ok(article) => HttpResponse::Created().json(ArticleDto::from(article)),
        Err(e) => error_response(e),
    }
}

#[put("/articles/{article_id}")]
pub async fn update_article(
    article_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ArticleForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error(&e);
    }

    let updates = UpdateArticle::from(&form);
    match article_services::update_article(
        repo.get_ref(),
        &user,
        article_id.into_inner(),
        &updates,
    ) {
        Ok(article) => HttpResponse::Ok().json(ArticleDto::from(article)),
        Err(e) => error_response(e),
    }
}

#[delete("/articles/{article_id}")]
pub async fn delete_article(
    article_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match article_services::delete_article(repo.get_ref(), &user, article_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

#[post("/categories")]
pub async fn create_category(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error(&e);
    }

    let new_category = NewCategory::from(&form);
    match category_services::create_category(repo.get_ref(), &user, &new_category) {
        Ok(category) => HttpResponse::Created().json(CategoryDto::from(category)),
        Err(e) => error_response(e),
    }
}

#[put("/categories/{category_id}")]
pub async fn update_category(
    category_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error(&e);
    }

    let updates = UpdateCategory::from(&form);
    match category_services::update_category(
        repo.get_ref(),
        &user,
        category_id.into_inner(),
        &updates,
    ) {
        Ok(category) => HttpResponse::Ok().json(CategoryDto::from(category)),
        Err(e) => error_response(e),
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_services::delete_category(repo.get_ref(), &user, category_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

#[post("/tags")]
pub async fn create_tag(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<TagForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error(&e);
    }

    let new_tag = NewTag::from(&form);
    match tag_services::create_tag(repo.get_ref(), &user, &new_tag) {
        Ok(tag) => HttpResponse::Created().json(TagDto::from(tag)),
        Err(e) => error_response(e),
    }
}

#[put("/tags/{tag_id}")]
pub async fn update_tag(
    tag_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<TagForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error(&e);
    }

    let updates = UpdateTag::from(&form);
    match tag_services::update_tag(repo.get_ref(), &user, tag_id.into_inner(), &updates) {
        Ok(tag) => HttpResponse::Ok().json(TagDto::from(tag)),
        Err(e) => error_response(e),
    }
}

#[delete("/tags/{tag_id}")]
pub async fn delete_tag(
    tag_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match tag_services::delete_tag(repo.get_ref(), &user, tag_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

#[get("/comments")]
pub async fn list_recent_comments(
    user: AuthenticatedUser,
    params: web::Query<PageQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(DEFAULT_COMMENTS_PER_PAGE);

    match comment_services::list_recent_comments(repo.get_ref(), &user, page, limit) {
        Ok(comments) => HttpResponse::Ok().json(CommentListDto::from(comments)),
        Err(e) => error_response(e),
    }
}

#[post("/upload/image")]
pub async fn upload_image(
    user: AuthenticatedUser,
    config: web::Data<crate::models::config::ServerConfig>,
    MultipartForm(form): MultipartForm<ImageUploadForm>,
) -> impl Responder {
    if !user.is_admin() {
        return HttpResponse::Forbidden().json(json!({ "error": "Admin access required" }));
    }
    if !is_image(&form.image) {
        return HttpResponse::BadRequest().json(json!({ "error": "File must be an image" }));
    }

    match save_image(&form.image, &config.uploads_dir) {
        Ok(uploaded) => HttpResponse::Created().json(uploaded),
        Err(e) => {
            error!("Failed to store image: {e}");
            HttpResponse::InternalServerError().json(json!({ "error": "Internal Server Error" }))
        }
    }
}
