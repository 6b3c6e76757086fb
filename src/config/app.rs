//! Application configuration loading from config.toml
//!
//! The file is optional: every key has a default, and `DATABASE_URL` in the
//! environment overrides `database_url` from the file.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the config file
pub const CONFIG_PATH_VAR: &str = "WALLET_LEDGER_CONFIG";

/// Config file used when [`CONFIG_PATH_VAR`] is unset
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Database used when neither the file nor `DATABASE_URL` names one
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/wallet_ledger.sqlite?mode=rwc";

/// Address the HTTP server listens on by default
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Origins allowed to make credentialed cross-origin requests by default
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:5173",
    "http://localhost:8080",
    "capacitor://localhost",
    "ionic://localhost",
];

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// `host:port` for the HTTP server
    pub bind_address: String,
    /// `SeaORM` connection string
    pub database_url: String,
    /// `[cors]` table
    pub cors: CorsConfig,
}

/// Cross-origin settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CorsConfig {
    /// Exact origins (scheme, host and port) that receive CORS headers
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.map(String::from).to_vec(),
        }
    }
}

/// Parses configuration from a TOML file.
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read {}: {e}", path.as_ref().display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.as_ref().display()),
    })
}

/// Resolves the config file path from [`CONFIG_PATH_VAR`].
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_VAR)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Loads the configuration the server starts with.
///
/// A missing file yields the defaults; an unreadable or invalid file is an
/// error. `DATABASE_URL` always wins over the file.
///
/// # Errors
/// Returns [`Error::Config`] for a file that exists but cannot be parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = config_path();
    let mut config = if path.exists() {
        info!("Loading configuration from {}", path.display());
        load_config(&path)?
    } else {
        warn!("{} not found, using defaults", path.display());
        AppConfig::default()
    };

    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.database_url = url;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            bind_address = "127.0.0.1:9000"
            database_url = "sqlite::memory:"

            [cors]
            allowed_origins = ["https://app.example.com"]
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.cors.allowed_origins, vec!["https://app.example.com"]);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str("bind_address = \"127.0.0.1:9001\"").unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9001");
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.cors.allowed_origins.len(), DEFAULT_ALLOWED_ORIGINS.len());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_address = \"127.0.0.1:8123\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8123");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_address = ").unwrap();

        let result = load_config(file.path());
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
