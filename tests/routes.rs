use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::Utc;
use serde_json::{Value, json};

use quill_cms::domain::auth::AuthenticatedUser;
use quill_cms::domain::category::NewCategory;
use quill_cms::domain::tag::NewTag;
use quill_cms::domain::user::{NewUser, User, UserRole};
use quill_cms::models::auth::issue_token;
use quill_cms::models::config::ServerConfig;
use quill_cms::repository::{
    ArticleReader, ArticleWriter, CategoryWriter, DieselRepository, TagWriter, UserWriter,
};
use quill_cms::routes::admin as admin_routes;
use quill_cms::routes::articles as article_routes;
use quill_cms::routes::categories as category_routes;
use quill_cms::routes::comments as comment_routes;
use quill_cms::routes::health;
use quill_cms::routes::likes as like_routes;
use quill_cms::routes::sitemap::sitemap_xml;
use quill_cms::routes::users as user_routes;

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

fn token_for(user: &User, config: &ServerConfig) -> String {
    let claims = AuthenticatedUser::new(user, Utc::now().timestamp());
    issue_token(&claims, &config.secret).unwrap()
}

fn seed_user(repo: &DieselRepository, email: &str, role: UserRole) -> User {
    repo.create_user(&NewUser::new(
        email.into(),
        bcrypt::hash("correct-horse", 4).unwrap(),
        role,
        Some("Reader".into()),
    ))
    .unwrap()
}

fn seed_article(repo: &DieselRepository, title: &str) -> i32 {
    let category = repo
        .create_category(&NewCategory::new("Tech".into(), "tech".into(), None))
        .unwrap();
    let tag = repo
        .create_tag(&NewTag::new("Rust".into(), "rust".into()))
        .unwrap();
    let (article, _, _) = repo
        .create_article(&quill_cms::domain::article::NewArticle::new(
            title.into(),
            "content".into(),
            Some("summary".into()),
            "Jane".into(),
            None,
            category.id,
            vec![tag.id],
        ))
        .unwrap();
    article.id
}

macro_rules! test_app {
    ($repo:expr, $config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo.clone()))
                .app_data(web::Data::new($config.clone()))
                .service(health)
                .service(sitemap_xml)
                .service(
                    web::scope("/api")
                        .service(
                            web::scope("/admin")
                                .service(admin_routes::create_category)
                                .service(admin_routes::create_article)
                                .service(admin_routes::list_recent_comments),
                        )
                        .service(user_routes::register)
                        .service(user_routes::login)
                        .service(user_routes::get_profile)
                        .service(article_routes::list_articles)
                        .service(article_routes::get_article)
                        .service(article_routes::list_articles_by_category)
                        .service(category_routes::list_categories)
                        .service(comment_routes::list_article_comments)
                        .service(comment_routes::create_comment)
                        .service(comment_routes::delete_comment)
                        .service(like_routes::toggle_like)
                        .service(like_routes::get_like_count),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn health_and_empty_listing() {
    let test_db = common::TestDb::new("routes_health_and_empty_listing.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let config = server_config();
    let app = test_app!(repo, config);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/articles").to_request(),
    )
    .await;
    assert_eq!(body["articles"].as_array().unwrap().len(), 0);
    assert_eq!(body["pagination"]["total"], 0);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
}

#[actix_web::test]
async fn register_then_login() {
    let test_db = common::TestDb::new("routes_register_then_login.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let config = server_config();
    let app = test_app!(repo, config);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "email": "reader@example.com",
                "password": "longenough",
                "nickname": "Reader"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "reader@example.com");
    assert!(body["user"].get("passwordHash").is_none());

    // Same email again conflicts.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "email": "reader@example.com",
                "password": "longenough"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Short password is a validation error.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "email": "other@example.com",
                "password": "short"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({
                "email": "reader@example.com",
                "password": "wrong-password"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({
                "email": "reader@example.com",
                "password": "longenough"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn article_detail_counts_views() {
    let test_db = common::TestDb::new("routes_article_detail_counts_views.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let article_id = seed_article(&repo, "Counted");
    let config = server_config();
    let app = test_app!(repo, config);

    let uri = format!("/api/articles/{article_id}");

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(body["title"], "Counted");
    assert_eq!(body["viewCount"], 0);
    assert_eq!(body["category"]["slug"], "tech");
    assert_eq!(body["tags"][0]["slug"], "rust");

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(body["viewCount"], 1);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/articles/999")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn missing_category_is_not_found() {
    let test_db = common::TestDb::new("routes_missing_category.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let config = server_config();
    let app = test_app!(repo, config);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/categories/nope/articles")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn comment_lifecycle_via_api() {
    let test_db = common::TestDb::new("routes_comment_lifecycle.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let article_id = seed_article(&repo, "Discussed");
    let owner = seed_user(&repo, "owner@example.com", UserRole::User);
    let stranger = seed_user(&repo, "stranger@example.com", UserRole::User);
    let config = server_config();
    let owner_token = token_for(&owner, &config);
    let stranger_token = token_for(&stranger, &config);
    let app = test_app!(repo, config);

    let uri = format!("/api/articles/{article_id}/comments");

    // Unauthenticated posting is rejected.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&uri)
            .set_json(json!({ "content": "hello" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&uri)
            .insert_header(("Authorization", format!("Bearer {owner_token}")))
            .set_json(json!({ "content": "hello <b>world</b>" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let comment_id = created["id"].as_i64().unwrap();

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["comments"][0]["user"]["nickname"], "Reader");

    // The denormalized counter is visible on the article.
    let (article, _, _) = repo.get_article_by_id(article_id).unwrap().unwrap();
    assert_eq!(article.comment_count, 1);

    let delete_uri = format!("/api/comments/{comment_id}");
    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&delete_uri)
            .insert_header(("Authorization", format!("Bearer {stranger_token}")))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&delete_uri)
            .insert_header(("Authorization", format!("Bearer {owner_token}")))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let (article, _, _) = repo.get_article_by_id(article_id).unwrap().unwrap();
    assert_eq!(article.comment_count, 0);
}

#[actix_web::test]
async fn like_toggle_via_api() {
    let test_db = common::TestDb::new("routes_like_toggle.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let article_id = seed_article(&repo, "Liked");
    let user = seed_user(&repo, "reader@example.com", UserRole::User);
    let config = server_config();
    let token = token_for(&user, &config);
    let app = test_app!(repo, config);

    let uri = format!("/api/articles/{article_id}/like");

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri(&uri)
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request(),
    )
    .await;
    assert_eq!(body["liked"], true);
    assert_eq!(body["likeCount"], 1);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri(&uri)
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request(),
    )
    .await;
    assert_eq!(body["liked"], false);
    assert_eq!(body["likeCount"], 0);

    let count_uri = format!("/api/articles/{article_id}/likes");
    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri(&count_uri).to_request())
            .await;
    assert_eq!(body["likeCount"], 0);
}

#[actix_web::test]
async fn admin_endpoints_enforce_role() {
    let test_db = common::TestDb::new("routes_admin_role.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let admin = seed_user(&repo, "admin@example.com", UserRole::Admin);
    let reader = seed_user(&repo, "reader@example.com", UserRole::User);
    let config = server_config();
    let admin_token = token_for(&admin, &config);
    let reader_token = token_for(&reader, &config);
    let app = test_app!(repo, config);

    let payload = json!({ "name": "Tech", "slug": "tech" });

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/categories")
            .insert_header(("Authorization", format!("Bearer {reader_token}")))
            .set_json(&payload)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/categories")
            .insert_header(("Authorization", format!("Bearer {admin_token}")))
            .set_json(&payload)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Slug collisions surface as 409.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/categories")
            .insert_header(("Authorization", format!("Bearer {admin_token}")))
            .set_json(&payload)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn sitemap_lists_seeded_content() {
    let test_db = common::TestDb::new("routes_sitemap.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let article_id = seed_article(&repo, "Mapped");
    let config = server_config();
    let app = test_app!(repo, config);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/sitemap.xml").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/xml"
    );
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains(&format!(
        "<loc>https://blog.example.com/articles/{article_id}</loc>"
    )));
    assert!(body.contains("<loc>https://blog.example.com/categories/tech</loc>"));
}
