use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::articles::{ArticleDto, ArticleListDto};
use crate::pagination::DEFAULT_ARTICLES_PER_PAGE;
use crate::repository::DieselRepository;
use crate::routes::{PageQuery, error_response};
use crate::services::articles as article_services;

#[get("/articles")]
pub async fn list_articles(
    params: web::Query<PageQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(DEFAULT_ARTICLES_PER_PAGE);

    match article_services::list_articles(repo.get_ref(), page, limit) {
        Ok(articles) => HttpResponse::Ok().json(ArticleListDto::from(articles)),
        Err(e) => error_response(e),
    }
}

#[get("/articles/{article_id}")]
pub async fn get_article(
    article_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match article_services::get_article(repo.get_ref(), article_id.into_inner()) {
        Ok(article) => HttpResponse::Ok().json(ArticleDto::from(article)),
        Err(e) => error_response(e),
    }
}

#[get("/categories/{slug}/articles")]
pub async fn list_articles_by_category(
    slug: web::Path<String>,
    params: web::Query<PageQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(DEFAULT_ARTICLES_PER_PAGE);

    match article_services::list_articles_by_category(repo.get_ref(), &slug, page, limit) {
        Ok(articles) => HttpResponse::Ok().json(ArticleListDto::from(articles)),
        Err(e) => error_response(e),
    }
}

#[get("/tags/{slug}/articles")]
pub async fn list_articles_by_tag(
    slug: web::Path<String>,
    params: web::Query<PageQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(DEFAULT_ARTICLES_PER_PAGE);

    match article_services::list_articles_by_tag(repo.get_ref(), &slug, page, limit) {
        Ok(articles) => HttpResponse::Ok().json(ArticleListDto::from(articles)),
        Err(e) => error_response(e),
    }
}
