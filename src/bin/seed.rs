//! Seeds the database with the initial admin account and a base set of
//! categories and tags. Safe to run repeatedly; existing rows are kept.

use std::error::Error;

use log::{info, warn};

use quill_cms::db::establish_connection_pool;
use quill_cms::domain::category::NewCategory;
use quill_cms::domain::tag::NewTag;
use quill_cms::domain::user::{NewUser, UserRole};
use quill_cms::models::config::ServerConfig;
use quill_cms::repository::{
    CategoryReader, CategoryWriter, DieselRepository, TagReader, TagWriter, UserReader,
    UserWriter,
};

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()?;
    let server_config: ServerConfig = settings.try_deserialize()?;

    let pool = establish_connection_pool(&server_config.database_url)?;
    let repo = DieselRepository::new(pool);

    let email = std::env::var("SEED_ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".into());
    let password = std::env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into());

    if repo.get_user_by_email(&email)?.is_some() {
        info!("Admin user {email} already exists");
    } else {
        let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;
        let admin = NewUser::new(email.clone(), password_hash, UserRole::Admin, None);
        let user = repo.create_user(&admin)?;
        info!("Admin user created: {email} (id {})", user.id);
        warn!("Change the seeded admin password after first login");
    }

    let categories = [
        ("Technology", "technology", Some("Software and engineering")),
        ("Life", "life", Some("Notes and essays")),
        ("Tutorials", "tutorials", Some("Step-by-step guides")),
    ];
    for (name, slug, description) in categories {
        if repo.get_category_by_slug(slug)?.is_none() {
            repo.create_category(&NewCategory::new(
                name.into(),
                slug.into(),
                description.map(Into::into),
            ))?;
            info!("Category created: {slug}");
        }
    }

    let tags = [
        ("Rust", "rust"),
        ("Web", "web"),
        ("Databases", "databases"),
    ];
    for (name, slug) in tags {
        if repo.get_tag_by_slug(slug)?.is_none() {
            repo.create_tag(&NewTag::new(name.into(), slug.into()))?;
            info!("Tag created: {slug}");
        }
    }

    Ok(())
}
