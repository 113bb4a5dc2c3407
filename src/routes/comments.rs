use actix_web::{HttpResponse, Responder, delete, get, post, web};
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::dto::comments::{CommentCreatedDto, CommentListDto};
use crate::forms::comments::CreateCommentForm;
use crate::pagination::DEFAULT_COMMENTS_PER_PAGE;
use crate::repository::DieselRepository;
use crate::routes::{PageQuery, error_response, validation_error};
use crate::services::comments as comment_services;

#[get("/articles/{article_id}/comments")]
pub async fn list_article_comments(
    article_id: web::Path<i32>,
    params: web::Query<PageQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(DEFAULT_COMMENTS_PER_PAGE);

    match comment_services::list_article_comments(
        repo.get_ref(),
        article_id.into_inner(),
        page,
        limit,
    ) {
        Ok(comments) => HttpResponse::Ok().json(CommentListDto::from(comments)),
        Err(e) => error_response(e),
    }
}

#[post("/articles/{article_id}/comments")]
pub async fn create_comment(
    article_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateCommentForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error(&e);
    }

    match comment_services::create_comment(
        repo.get_ref(),
        &user,
        article_id.into_inner(),
        &form.content,
    ) {
        Ok(comment) => HttpResponse::Created().json(CommentCreatedDto::from(comment)),
        Err(e) => error_response(e),
    }
}

#[delete("/comments/{comment_id}")]
pub async fn delete_comment(
    comment_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match comment_services::delete_comment(repo.get_ref(), &user, comment_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}
