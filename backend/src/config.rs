//! Configuration management for the forest fire dashboard
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FFD_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Managed database backend configuration
    pub backend: BackendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// Project URL of the REST backend, e.g. https://xyz.supabase.co
    #[serde(default)]
    pub url: String,

    /// Anonymous API key sent as `apikey` and bearer token
    #[serde(default)]
    pub api_key: String,

    /// Database schema exposed by the REST layer
    pub schema: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// JSON fixture file served instead of the remote backend
    #[serde(default)]
    pub fixture_path: Option<String>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("FFD_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("backend.schema", "public")?
            .set_default("backend.request_timeout_secs", 15)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FFD_ prefix)
            .add_source(
                Environment::with_prefix("FFD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.backend.validate()?;
        Ok(config)
    }
}

impl BackendConfig {
    /// A fixture file or a complete remote connection is required
    fn validate(&self) -> Result<(), ConfigError> {
        if self.fixture_path.is_some() {
            return Ok(());
        }
        if self.url.is_empty() || self.api_key.is_empty() {
            return Err(ConfigError::Message(
                "backend.url and backend.api_key are required unless backend.fixture_path is set"
                    .to_string(),
            ));
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(url: &str, api_key: &str, fixture_path: Option<&str>) -> BackendConfig {
        BackendConfig {
            url: url.to_string(),
            api_key: api_key.to_string(),
            schema: "public".to_string(),
            request_timeout_secs: 15,
            fixture_path: fixture_path.map(str::to_string),
        }
    }

    #[test]
    fn test_remote_backend_needs_url_and_key() {
        assert!(backend("https://example.supabase.co", "key", None).validate().is_ok());
        assert!(backend("", "key", None).validate().is_err());
        assert!(backend("https://example.supabase.co", "", None).validate().is_err());
    }

    #[test]
    fn test_fixture_backend_needs_nothing_else() {
        assert!(backend("", "", Some("fixtures/dashboard.json")).validate().is_ok());
    }
}
