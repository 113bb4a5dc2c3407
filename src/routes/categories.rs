use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::categories::CategoryWithCountDto;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::categories as category_services;

#[get("/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match category_services::list_categories(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(
            categories
                .into_iter()
                .map(CategoryWithCountDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => error_response(e),
    }
}

#[get("/categories/{slug}")]
pub async fn get_category(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_services::get_category_by_slug(repo.get_ref(), &slug) {
        Ok(category) => HttpResponse::Ok().json(CategoryWithCountDto::from(category)),
        Err(e) => error_response(e),
    }
}
