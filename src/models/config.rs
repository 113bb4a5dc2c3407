//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// HS256 secret used to sign and verify JWTs.
    pub secret: String,
    /// Directory uploaded images are written to and served from.
    pub uploads_dir: String,
    /// Public base URL of the site, used for sitemap entries.
    pub frontend_url: String,
}
