//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    pub site: SiteConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
    /// Apply pending SQL migrations on startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Session token verification
///
/// Tokens are issued by the external auth provider and signed with a
/// shared HMAC secret.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Clock skew tolerated when checking `exp`, in seconds
    #[serde(default = "default_jwt_leeway")]
    pub leeway_seconds: u64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Media storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: u32,
    /// URL prefix under which stored files are served
    #[serde(default = "default_public_media_url")]
    pub public_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            max_file_size_mb: default_max_file_size(),
            public_url: default_public_media_url(),
        }
    }
}

impl StorageConfig {
    #[must_use]
    pub fn max_file_size_bytes(&self) -> u64 {
        u64::from(self.max_file_size_mb) * 1024 * 1024
    }
}

/// Public site metadata used in feeds
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub title: String,
    #[serde(default = "default_site_url")]
    pub url: String,
    #[serde(default = "default_site_description")]
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            url: default_site_url(),
            description: default_site_description(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "blog-server".to_string()
}

fn default_true() -> bool {
    true
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_jwt_leeway() -> u64 {
    30
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}

fn default_max_file_size() -> u32 {
    5
}

fn default_public_media_url() -> String {
    "/uploads".to_string()
}

fn default_site_title() -> String {
    "WebDev Blog".to_string()
}

fn default_site_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_site_description() -> String {
    "A full-stack blogging platform".to_string()
}

/// Source of raw configuration values
trait VarSource {
    fn get(&self, key: &str) -> Option<String>;

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::MissingVar(key))
    }

    fn parsed_or<T: FromStr>(&self, key: &'static str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, raw)),
            None => Ok(default),
        }
    }
}

struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl VarSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::load(&ProcessEnv)
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::load(vars)
    }

    fn load(vars: &impl VarSource) -> Result<Self, ConfigError> {
        let env = match vars.get("APP_ENV") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("APP_ENV", raw))?,
            None => Environment::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: vars.get("APP_NAME").unwrap_or_else(default_app_name),
                env,
                run_migrations: vars.parsed_or("RUN_MIGRATIONS", default_true())?,
            },
            server: ServerConfig {
                host: vars.get("SERVER_HOST").unwrap_or_else(default_host),
                port: vars.parsed_or("SERVER_PORT", default_port())?,
            },
            database: DatabaseConfig {
                url: vars.required("DATABASE_URL")?,
                max_connections: vars
                    .parsed_or("DATABASE_MAX_CONNECTIONS", default_max_connections())?,
                min_connections: vars
                    .parsed_or("DATABASE_MIN_CONNECTIONS", default_min_connections())?,
            },
            jwt: JwtConfig {
                secret: vars.required("JWT_SECRET")?,
                leeway_seconds: vars.parsed_or("JWT_LEEWAY_SECONDS", default_jwt_leeway())?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: vars
                    .parsed_or("RATE_LIMIT_REQUESTS_PER_SECOND", default_requests_per_second())?,
                burst: vars.parsed_or("RATE_LIMIT_BURST", default_burst())?,
            },
            cors: CorsConfig {
                allowed_origins: vars
                    .get("CORS_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            storage: StorageConfig {
                upload_dir: vars.get("UPLOAD_DIR").unwrap_or_else(default_upload_dir),
                max_file_size_mb: vars.parsed_or("MAX_FILE_SIZE_MB", default_max_file_size())?,
                public_url: vars
                    .get("PUBLIC_MEDIA_URL")
                    .unwrap_or_else(default_public_media_url)
                    .trim_end_matches('/')
                    .to_string(),
            },
            site: SiteConfig {
                title: vars.get("SITE_TITLE").unwrap_or_else(default_site_title),
                url: vars
                    .get("SITE_URL")
                    .unwrap_or_else(default_site_url)
                    .trim_end_matches('/')
                    .to_string(),
                description: vars
                    .get("SITE_DESCRIPTION")
                    .unwrap_or_else(default_site_description),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
