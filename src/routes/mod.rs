use actix_web::{HttpResponse, Responder, get};
use chrono::Utc;
use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::services::ServiceError;

pub mod admin;
pub mod articles;
pub mod categories;
pub mod comments;
pub mod likes;
pub mod sitemap;
pub mod tags;
pub mod uploads;
pub mod users;

/// Common `?page=&limit=` query parameters.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// Maps a service failure onto the JSON error contract.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match &err {
        ServiceError::NotFound(msg) => HttpResponse::NotFound().json(json!({ "error": msg })),
        ServiceError::Conflict(msg) => HttpResponse::Conflict().json(json!({ "error": msg })),
        ServiceError::Validation(msg) => {
            HttpResponse::BadRequest().json(json!({ "error": msg }))
        }
        ServiceError::Unauthorized(msg) => {
            HttpResponse::Unauthorized().json(json!({ "error": msg }))
        }
        ServiceError::Forbidden(msg) => HttpResponse::Forbidden().json(json!({ "error": msg })),
        ServiceError::Internal(msg) => {
            error!("Internal error: {msg}");
            HttpResponse::InternalServerError().json(json!({ "error": "Internal Server Error" }))
        }
        ServiceError::Repository(e) => {
            error!("Repository failure: {e}");
            HttpResponse::InternalServerError().json(json!({ "error": "Internal Server Error" }))
        }
    }
}

/// 400 with the field-level details `validator` collected.
pub fn validation_error(errors: &validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "error": "Validation Error",
        "details": errors,
    }))
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
