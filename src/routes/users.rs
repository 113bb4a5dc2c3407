use actix_multipart::form::MultipartForm;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, put, web};
use chrono::Utc;
use log::error;
use serde_json::json;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::user::{UpdateProfile, User};
use crate::dto::articles::ArticleListDto;
use crate::dto::comments::UserCommentListDto;
use crate::dto::users::{AuthResponseDto, UserDto};
use crate::forms::users::{ChangePasswordForm, LoginForm, RegisterForm, UpdateProfileForm};
use crate::models::auth::issue_token;
use crate::models::config::ServerConfig;
use crate::pagination::DEFAULT_COMMENTS_PER_PAGE;
use crate::repository::DieselRepository;
use crate::routes::uploads::{AvatarUploadForm, is_image, save_image};
use crate::routes::{PageQuery, error_response, validation_error};
use crate::services::comments as comment_services;
use crate::services::likes as like_services;
use crate::services::users as user_services;

fn auth_response(user: User, config: &ServerConfig, status: StatusCode) -> HttpResponse {
    let claims = AuthenticatedUser::new(&user, Utc::now().timestamp());
    match issue_token(&claims, &config.secret) {
        Ok(token) => HttpResponse::build(status).json(AuthResponseDto {
            token,
            user: user.into(),
        }),
        Err(e) => {
            error!("Failed to issue token: {e}");
            HttpResponse::InternalServerError().json(json!({ "error": "Internal Server Error" }))
        }
    }
}

#[post("/auth/register")]
pub async fn register(
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    web::Json(form): web::Json<RegisterForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error(&e);
    }

    match user_services::register(
        repo.get_ref(),
        &form.email,
        &form.password,
        form.nickname.clone(),
    ) {
        // Auto-login: a successful registration responds like a login.
        Ok(user) => auth_response(user, &config, StatusCode::CREATED),
        Err(e) => error_response(e),
    }
}

#[post("/auth/login")]
pub async fn login(
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    web::Json(form): web::Json<LoginForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error(&e);
    }

    match user_services::login(repo.get_ref(), &form.email, &form.password) {
        Ok(user) => auth_response(user, &config, StatusCode::OK),
        Err(e) => error_response(e),
    }
}

#[get("/users/me")]
pub async fn get_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match user_services::get_profile(repo.get_ref(), user.sub) {
        Ok(profile) => HttpResponse::Ok().json(UserDto::from(profile)),
        Err(e) => error_response(e),
    }
}

#[put("/users/me")]
pub async fn update_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateProfileForm>,
) -> impl Responder {
    let updates = UpdateProfile::from(&form);

    match user_services::update_profile(repo.get_ref(), user.sub, &updates) {
        Ok(profile) => HttpResponse::Ok().json(UserDto::from(profile)),
        Err(e) => error_response(e),
    }
}

#[put("/users/me/password")]
pub async fn change_password(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ChangePasswordForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error(&e);
    }

    match user_services::change_password(
        repo.get_ref(),
        user.sub,
        &form.old_password,
        &form.new_password,
    ) {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Password updated" })),
        Err(e) => error_response(e),
    }
}

#[post("/users/me/avatar")]
pub async fn upload_avatar(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<AvatarUploadForm>,
) -> impl Responder {
    if !is_image(&form.avatar) {
        return HttpResponse::BadRequest().json(json!({ "error": "File must be an image" }));
    }

    let uploaded = match save_image(&form.avatar, &config.uploads_dir) {
        Ok(uploaded) => uploaded,
        Err(e) => {
            error!("Failed to store avatar: {e}");
            return HttpResponse::InternalServerError()
                .json(json!({ "error": "Internal Server Error" }));
        }
    };

    match user_services::update_avatar(repo.get_ref(), user.sub, &uploaded.url) {
        Ok(profile) => HttpResponse::Ok().json(UserDto::from(profile)),
        Err(e) => error_response(e),
    }
}

#[get("/users/me/comments")]
pub async fn list_my_comments(
    user: AuthenticatedUser,
    params: web::Query<PageQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(DEFAULT_COMMENTS_PER_PAGE);

    match comment_services::list_user_comments(repo.get_ref(), &user, page, limit) {
        Ok(comments) => HttpResponse::Ok().json(UserCommentListDto::from(comments)),
        Err(e) => error_response(e),
    }
}

#[get("/users/me/likes")]
pub async fn list_my_likes(
    user: AuthenticatedUser,
    params: web::Query<PageQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(DEFAULT_COMMENTS_PER_PAGE);

    match like_services::list_liked_articles(repo.get_ref(), &user, page, limit) {
        Ok(articles) => HttpResponse::Ok().json(ArticleListDto::from(articles)),
        Err(e) => error_response(e),
    }
}
