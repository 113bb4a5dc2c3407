use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;

use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::sitemap as sitemap_services;

#[get("/sitemap.xml")]
pub async fn sitemap_xml(
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match sitemap_services::build_sitemap(
        repo.get_ref(),
        &config.frontend_url,
        Utc::now().naive_utc(),
    ) {
        Ok(xml) => HttpResponse::Ok()
            .content_type("application/xml")
            .body(xml),
        Err(e) => error_response(e),
    }
}
