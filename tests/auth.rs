use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::Utc;
use serde_json::Value;

use quill_cms::domain::auth::{AuthenticatedUser, TOKEN_TTL_SECS};
use quill_cms::domain::user::{NewUser, UserRole};
use quill_cms::models::auth::issue_token;
use quill_cms::models::config::ServerConfig;
use quill_cms::repository::{DieselRepository, UserWriter};
use quill_cms::routes::users::get_profile;

mod common;

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".into(),
        port: 0,
        database_url: String::new(),
        secret: "test-secret".into(),
        uploads_dir: "target/test-uploads".into(),
        frontend_url: "https://blog.example.com".into(),
    }
}

#[actix_web::test]
async fn bearer_token_gates_protected_routes() {
    let test_db = common::TestDb::new("auth_bearer_token_gates.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let config = server_config();

    let user = repo
        .create_user(&NewUser::new(
            "reader@example.com".into(),
            "hash".into(),
            UserRole::User,
            None,
        ))
        .unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(config.clone()))
            .service(web::scope("/api").service(get_profile)),
    )
    .await;

    // No header.
    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/api/users/me").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Wrong scheme.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/users/me")
            .insert_header(("Authorization", "Basic abc"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Garbage token.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/users/me")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Expired token.
    let expired = AuthenticatedUser {
        sub: user.id,
        email: user.email.clone(),
        role: user.role,
        exp: Utc::now().timestamp() - TOKEN_TTL_SECS,
    };
    let expired_token = issue_token(&expired, &config.secret).unwrap();
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/users/me")
            .insert_header(("Authorization", format!("Bearer {expired_token}")))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Valid token reaches the handler.
    let claims = AuthenticatedUser::new(&user, Utc::now().timestamp());
    let token = issue_token(&claims, &config.secret).unwrap();
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/users/me")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "reader@example.com");
}
