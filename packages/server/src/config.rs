use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Session lifetime in hours.
    pub session_ttl_hours: i64,
    /// Bootstrap admin credentials, hashed before storage on startup.
    pub admin_username: String,
    pub admin_password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    /// Directory uploaded images are written to and served back from.
    pub dir: String,
    /// Per-file size cap in bytes.
    pub max_file_size: u64,
    /// Maximum files accepted per upload request.
    pub max_files: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    /// Insert the demo listings on startup.
    pub demo_listings: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub uploads: UploadConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("auth.session_ttl_hours", 24)?
            .set_default("auth.admin_username", "admin")?
            .set_default("auth.admin_password", "password123")?
            .set_default("uploads.dir", "./uploads")?
            .set_default("uploads.max_file_size", 5 * 1024 * 1024)?
            .set_default("uploads.max_files", 3)?
            .set_default("seed.demo_listings", true)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., PAWFINDER__AUTH__ADMIN_PASSWORD)
            .add_source(Environment::with_prefix("PAWFINDER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
