use actix_web::{HttpResponse, Responder, get, post, web};

use crate::domain::auth::AuthenticatedUser;
use crate::dto::likes::{LikeCountDto, LikeToggleDto, LikedDto};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::likes as like_services;

#[post("/articles/{article_id}/like")]
pub async fn toggle_like(
    article_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match like_services::toggle_like(repo.get_ref(), &user, article_id.into_inner()) {
        Ok(toggle) => HttpResponse::Ok().json(LikeToggleDto::from(toggle)),
        Err(e) => error_response(e),
    }
}

#[get("/articles/{article_id}/like")]
pub async fn check_user_liked(
    article_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match like_services::user_liked(repo.get_ref(), &user, article_id.into_inner()) {
        Ok(liked) => HttpResponse::Ok().json(LikedDto { liked }),
        Err(e) => error_response(e),
    }
}

#[get("/articles/{article_id}/likes")]
pub async fn get_like_count(
    article_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match like_services::like_count(repo.get_ref(), article_id.into_inner()) {
        Ok(like_count) => HttpResponse::Ok().json(LikeCountDto { like_count }),
        Err(e) => error_response(e),
    }
}
