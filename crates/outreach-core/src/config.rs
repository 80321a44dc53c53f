//! Configuration management for the Outreach CMS backend

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// File storage configuration
    pub storage: StorageConfig,

    /// API configuration
    pub api: ApiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,

    /// Maximum number of connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of connections
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Idle timeout in seconds
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout: u64,
}

/// Storage configuration for uploaded images
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base directory for file storage
    pub base_dir: PathBuf,

    /// Upload directory (relative to `base_dir`)
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,

    /// Maximum image size in bytes
    #[serde(default = "default_max_image_size")]
    pub max_image_size: u64,

    /// Allowed image content types
    #[serde(default = "default_allowed_image_types")]
    pub allowed_image_types: Vec<String>,

    /// Public URL prefix for stored images
    #[serde(default = "default_public_url_prefix")]
    pub public_url_prefix: String,
}

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Enable CORS
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,

    /// CORS allowed origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Default page size for list endpoints
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,

    /// Maximum page size for list endpoints
    #[serde(default = "default_max_page_size")]
    pub max_page_size: i64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(4)
}

const fn default_max_connections() -> u32 {
    20
}

const fn default_min_connections() -> u32 {
    2
}

const fn default_connect_timeout() -> u64 {
    30
}

const fn default_idle_timeout() -> u64 {
    600
}

fn default_upload_dir() -> String {
    "uploads".to_string()
}

const fn default_max_image_size() -> u64 {
    10_000_000 // 10MB
}

fn default_allowed_image_types() -> Vec<String> {
    vec![
        "image/png".to_string(),
        "image/jpeg".to_string(),
        "image/webp".to_string(),
        "image/gif".to_string(),
    ]
}

fn default_public_url_prefix() -> String {
    "/uploads".to_string()
}

const fn default_enable_cors() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

const fn default_page_size() -> i64 {
    50
}

const fn default_max_page_size() -> i64 {
    500
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("OUTREACH").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        // Try to get database URL from environment variable, fallback to default
        let database_url = std::env::var("OUTREACH_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .unwrap_or_else(|_| "postgresql://localhost/outreach".to_string());

        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                workers: default_workers(),
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections: default_max_connections(),
                min_connections: default_min_connections(),
                connect_timeout: default_connect_timeout(),
                idle_timeout: default_idle_timeout(),
            },
            storage: StorageConfig {
                base_dir: PathBuf::from("./data"),
                upload_dir: default_upload_dir(),
                max_image_size: default_max_image_size(),
                allowed_image_types: default_allowed_image_types(),
                public_url_prefix: default_public_url_prefix(),
            },
            api: ApiConfig {
                enable_cors: default_enable_cors(),
                cors_origins: default_cors_origins(),
                default_page_size: default_page_size(),
                max_page_size: default_max_page_size(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}
