//! Configuration management for the Mitra backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with MITRA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// JWT session configuration
    pub jwt: JwtConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Generative advisory API configuration
    pub advisory: AdvisoryConfig,

    /// Local profile storage
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Secret key for signing session tokens
    pub secret: String,

    /// Session token expiration in seconds
    pub session_expiry: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdvisoryConfig {
    /// Generative language API endpoint
    pub api_endpoint: String,

    /// API key; advice falls back to templates when empty
    pub api_key: String,

    pub model: String,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the persisted profile record
    pub data_dir: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("MITRA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("jwt.secret", "development-secret-key")?
            .set_default("jwt.session_expiry", 604800)?
            .set_default("weather.api_endpoint", "https://api.openweathermap.org/data/2.5")?
            .set_default("weather.api_key", "")?
            .set_default(
                "advisory.api_endpoint",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("advisory.api_key", "")?
            .set_default("advisory.model", "gemini-pro")?
            .set_default("advisory.temperature", 0.9)?
            .set_default("advisory.top_k", 1)?
            .set_default("advisory.top_p", 1.0)?
            .set_default("advisory.max_output_tokens", 2048)?
            .set_default("storage.data_dir", "data")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (MITRA_ prefix)
            .add_source(
                Environment::with_prefix("MITRA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
