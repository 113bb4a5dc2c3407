#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
mod server {
    use std::path::Path;

    use actix_cors::Cors;
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::db::establish_connection_pool;
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::admin::{
        create_article, create_category, create_tag, delete_article, delete_category, delete_tag,
        list_recent_comments, update_article, update_category, update_tag, upload_image,
    };
    use crate::routes::articles::{
        get_article, list_articles, list_articles_by_category, list_articles_by_tag,
    };
    use crate::routes::categories::{get_category, list_categories};
    use crate::routes::comments::{create_comment, delete_comment, list_article_comments};
    use crate::routes::health;
    use crate::routes::likes::{check_user_liked, get_like_count, toggle_like};
    use crate::routes::sitemap::sitemap_xml;
    use crate::routes::tags::{get_tag, list_tags};
    use crate::routes::users::{
        change_password, get_profile, list_my_comments, list_my_likes, login, register,
        update_profile, upload_avatar,
    };

    /// Builds and runs the Actix-Web HTTP server using the provided
    /// configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish the Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool);

        std::fs::create_dir_all(Path::new(&server_config.uploads_dir).join("images"))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        let uploads_dir = server_config.uploads_dir.clone();

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(health)
                .service(sitemap_xml)
                .service(Files::new("/uploads", &uploads_dir))
                .service(
                    web::scope("/api")
                        .service(
                            web::scope("/admin")
                                .service(create_article)
                                .service(update_article)
                                .service(delete_article)
                                .service(create_category)
                                .service(update_category)
                                .service(delete_category)
                                .service(create_tag)
                                .service(update_tag)
                                .service(delete_tag)
                                .service(list_recent_comments)
                                .service(upload_image),
                        )
                        .service(register)
                        .service(login)
                        .service(list_articles)
                        .service(get_article)
                        .service(list_articles_by_category)
                        .service(list_articles_by_tag)
                        .service(list_categories)
                        .service(get_category)
                        .service(list_tags)
                        .service(get_tag)
                        .service(list_article_comments)
                        .service(create_comment)
                        .service(delete_comment)
                        .service(toggle_like)
                        .service(check_user_liked)
                        .service(get_like_count)
                        .service(get_profile)
                        .service(update_profile)
                        .service(change_password)
                        .service(upload_avatar)
                        .service(list_my_comments)
                        .service(list_my_likes),
                )
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}

#[cfg(feature = "server")]
pub use server::run;
