use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::tags::TagWithCountDto;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::tags as tag_services;

#[get("/tags")]
pub async fn list_tags(repo: web::Data<DieselRepository>) -> impl Responder {
    match tag_services::list_tags(repo.get_ref()) {
        Ok(tags) => HttpResponse::Ok().json(
            tags.into_iter()
                .map(TagWithCountDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => error_response(e),
    }
}

#[get("/tags/{slug}")]
pub async fn get_tag(slug: web::Path<String>, repo: web::Data<DieselRepository>) -> impl Responder {
    match tag_services::get_tag_by_slug(repo.get_ref(), &slug) {
        Ok(tag) => HttpResponse::Ok().json(TagWithCountDto::from(tag)),
        Err(e) => error_response(e),
    }
}
