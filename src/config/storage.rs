//! Local storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where profile and history live
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Which key-value adapter to use
    #[serde(default)]
    pub backend: StorageBackend,
}

/// Key-value store implementation
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    /// Nothing survives the process
    Memory,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            backend: StorageBackend::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data/regret-engine")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data/regret-engine"));
        assert_eq!(config.backend, StorageBackend::File);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_data_dir_only_matters_for_files() {
        let mut config = StorageConfig {
            data_dir: PathBuf::new(),
            backend: StorageBackend::File,
        };
        assert!(config.validate().is_err());

        config.backend = StorageBackend::Memory;
        assert!(config.validate().is_ok());
    }
}
