//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::store::StalePolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub mock: MockConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analysis backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_analyze_path")]
    pub analyze_path: String,

    /// Multipart field carrying the image
    #[serde(default = "default_image_field")]
    pub image_field: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_analyze_path() -> String {
    "/analyze-image".to_string()
}

fn default_image_field() -> String {
    "image".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            analyze_path: default_analyze_path(),
            image_field: default_image_field(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// Full URL of the analysis endpoint
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.analyze_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

/// Front-end timing and behavior
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_splash_duration")]
    pub splash_duration_ms: u64,

    #[serde(default = "default_notification_duration")]
    pub notification_duration_ms: u64,

    #[serde(default)]
    pub stale_responses: StalePolicy,
}

fn default_splash_duration() -> u64 {
    3000
}

fn default_notification_duration() -> u64 {
    6000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            splash_duration_ms: default_splash_duration(),
            notification_duration_ms: default_notification_duration(),
            stale_responses: StalePolicy::default(),
        }
    }
}

impl UiConfig {
    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }
}

/// Mock analysis server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    #[serde(default = "default_mock_host")]
    pub host: String,

    #[serde(default = "default_mock_port")]
    pub port: u16,

    /// JSON file with the response to serve; built-in sample when unset
    pub fixture: Option<String>,
}

fn default_mock_host() -> String {
    "127.0.0.1".to_string()
}

fn default_mock_port() -> u16 {
    5000
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            host: default_mock_host(),
            port: default_mock_port(),
            fixture: None,
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

    pub file: Option<String>,
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
            file: None,
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
            dirs::config_dir().map(|p| p.join("macrolens").join("config.toml")),
            Some(PathBuf::from("./macrolens.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Explicit path if given, default search otherwise
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(url) = var("MACROLENS_SERVER_URL") {
            self.server.base_url = url;
        }
        if let Some(path) = var("MACROLENS_ANALYZE_PATH") {
            self.server.analyze_path = path;
        }

        // Mock overrides
        if let Some(host) = var("MACROLENS_MOCK_HOST") {
            self.mock.host = host;
        }
        if let Some(port) = var("MACROLENS_MOCK_PORT") {
            if let Ok(p) = port.parse() {
                self.mock.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = var("MACROLENS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("MACROLENS_LOG_FORMAT") {
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
    r#"# MacroLens Configuration
#
# Environment variables override these settings:
# - MACROLENS_SERVER_URL
# - MACROLENS_ANALYZE_PATH
# - MACROLENS_MOCK_HOST
# - MACROLENS_MOCK_PORT
# - MACROLENS_LOG_LEVEL
# - MACROLENS_LOG_FORMAT

[server]
# Analysis backend
base_url = "http://localhost:5000"

# Endpoint that accepts the image upload
analyze_path = "/analyze-image"

# Multipart field name for the image
image_field = "image"

# Request timeout in seconds
request_timeout_secs = 30

[ui]
# How long the welcome screen stays up (ms)
splash_duration_ms = 3000

# How long a notification stays up before hiding itself (ms)
notification_duration_ms = 6000

# Responses to superseded uploads: "ignore" or "last_writer_wins"
stale_responses = "ignore"

[mock]
# Mock analysis server address
host = "127.0.0.1"
port = 5000

# Optional JSON file with the response to serve
# fixture = "fixtures/salad.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/macrolens/macrolens.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.endpoint(), "http://localhost:5000/analyze-image");
        assert_eq!(config.server.image_field, "image");
        assert_eq!(config.ui.splash_duration(), Duration::from_millis(3000));
        assert_eq!(config.ui.notification_duration(), Duration::from_millis(6000));
        assert_eq!(config.ui.stale_responses, StalePolicy::Ignore);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        let server = ServerConfig {
            base_url: "http://api.local/".to_string(),
            analyze_path: "analyze-image".to_string(),
            ..ServerConfig::default()
        };
        assert_eq!(server.endpoint(), "http://api.local/analyze-image");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.base_url, "http://localhost:5000");
        assert_eq!(config.mock.port, 5000);
        assert!(config.mock.fixture.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nbase_url = \"http://food.example\"\n\n[ui]\nstale_responses = \"last_writer_wins\""
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.base_url, "http://food.example");
        assert_eq!(config.server.analyze_path, "/analyze-image");
        assert_eq!(config.ui.stale_responses, StalePolicy::LastWriterWins);
        assert_eq!(config.ui.splash_duration_ms, 3000);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[server\nbase_url = ").unwrap();
        let bad = Config::load(&path).unwrap_err();
        assert!(matches!(bad, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("MACROLENS_SERVER_URL", "http://override"),
            ("MACROLENS_MOCK_PORT", "6001"),
            ("MACROLENS_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.base_url, "http://override");
        assert_eq!(config.mock.port, 6001);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_bad_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| {
            (key == "MACROLENS_MOCK_PORT").then(|| "not-a-port".to_string())
        });
        assert_eq!(config.mock.port, 5000);
    }

    #[test]
    fn test_mock_host_accepts_names() {
        let config: Config = toml::from_str(
            r#"
[mock]
host = "localhost"
port = 0
"#,
        )
        .unwrap();
        assert_eq!(config.mock.host, "localhost");
        assert_eq!(config.mock.port, 0);
    }
}
