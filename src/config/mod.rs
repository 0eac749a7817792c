//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `REGRET_ENGINE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use regret_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Analysis API at {}", config.api.base_url);
//! ```

mod api;
mod error;
mod logging;
mod storage;

pub use api::{ApiConfig, MAX_TIMEOUT_SECS};
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;
use std::path::PathBuf;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration pointing at a local analysis service.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Analysis service location and timeout
    #[serde(default)]
    pub api: ApiConfig,

    /// Profile and history storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `REGRET_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `REGRET_ENGINE__API__BASE_URL=http://host:5000` -> `api.base_url`
    /// - `REGRET_ENGINE__STORAGE__BACKEND=memory` -> `storage.backend`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("REGRET_ENGINE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, base_url: Option<String>, data_dir: Option<PathBuf>) -> Self {
        if let Some(base_url) = base_url {
            self.api.base_url = base_url;
        }
        if let Some(data_dir) = data_dir {
            self.storage.data_dir = data_dir;
        }
        self
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("REGRET_ENGINE__API__BASE_URL");
        env::remove_var("REGRET_ENGINE__API__TIMEOUT_SECS");
        env::remove_var("REGRET_ENGINE__STORAGE__DATA_DIR");
        env::remove_var("REGRET_ENGINE__STORAGE__BACKEND");
        env::remove_var("REGRET_ENGINE__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("REGRET_ENGINE__API__BASE_URL", "https://regret.example.com");
        env::set_var("REGRET_ENGINE__API__TIMEOUT_SECS", "30");
        env::set_var("REGRET_ENGINE__STORAGE__BACKEND", "memory");
        env::set_var("REGRET_ENGINE__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.base_url, "https://regret.example.com");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.logging.log_format(), Ok(LogFormat::Json));
    }

    #[test]
    fn test_invalid_timeout_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("REGRET_ENGINE__API__TIMEOUT_SECS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default().with_overrides(
            Some("http://10.0.0.2:5000".to_string()),
            Some(PathBuf::from("/tmp/regret")),
        );
        assert_eq!(config.api.base_url, "http://10.0.0.2:5000");
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/regret"));

        let untouched = AppConfig::default().with_overrides(None, None);
        assert_eq!(untouched, AppConfig::default());
    }
}
