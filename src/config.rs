//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL for all endpoint requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Serve the bundled fixture dataset instead of calling the network
    #[serde(default)]
    pub use_fixtures: bool,

    #[serde(default)]
    pub endpoints: EndpointTemplates,
}

/// Endpoint path templates. `:id` is substituted with the user id.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointTemplates {
    #[serde(default = "default_user_endpoint")]
    pub user: String,

    #[serde(default = "default_activity_endpoint")]
    pub activity: String,

    #[serde(default = "default_average_sessions_endpoint")]
    pub average_sessions: String,

    #[serde(default = "default_performance_endpoint")]
    pub performance: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_user_endpoint() -> String {
    "/user/:id".to_string()
}

fn default_activity_endpoint() -> String {
    "/user/:id/activity".to_string()
}

fn default_average_sessions_endpoint() -> String {
    "/user/:id/average-sessions".to_string()
}

fn default_performance_endpoint() -> String {
    "/user/:id/performance".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            use_fixtures: false,
            endpoints: EndpointTemplates::default(),
        }
    }
}

impl Default for EndpointTemplates {
    fn default() -> Self {
        Self {
            user: default_user_endpoint(),
            activity: default_activity_endpoint(),
            average_sessions: default_average_sessions_endpoint(),
            performance: default_performance_endpoint(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("pulseboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var("PULSEBOARD_BASE_URL") {
            self.api.base_url = base_url;
        }
        if let Ok(fixtures) = std::env::var("PULSEBOARD_USE_FIXTURES") {
            if let Ok(flag) = fixtures.parse() {
                self.api.use_fixtures = flag;
            }
        }
        if let Ok(level) = std::env::var("PULSEBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("PULSEBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Pulseboard Configuration
#
# Environment variables override these settings:
# - PULSEBOARD_BASE_URL
# - PULSEBOARD_USE_FIXTURES
# - PULSEBOARD_LOG_LEVEL
# - PULSEBOARD_LOG_FORMAT

[api]
# Base URL of the backend API
base_url = "http://localhost:3000"

# Serve the bundled fixture dataset instead of calling the network
use_fixtures = false

[api.endpoints]
# Endpoint path templates; :id is replaced with the user id
user = "/user/:id"
activity = "/user/:id/activity"
average_sessions = "/user/:id/average-sessions"
performance = "/user/:id/performance"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert!(!config.api.use_fixtures);
        assert_eq!(config.api.endpoints.user, "/user/:id");
        assert_eq!(config.api.endpoints.performance, "/user/:id/performance");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[api]
base_url = "https://api.example.com"
use_fixtures = true

[logging]
level = "debug"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert!(config.api.use_fixtures);
        // Unspecified sections fall back to defaults
        assert_eq!(config.api.endpoints.activity, "/user/:id/activity");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
