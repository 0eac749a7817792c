//! File-backed key-value store.
//!
//! Each key lives in its own file, `{data_dir}/{key}.json`. Writes go to a
//! temporary sibling first and are renamed into place.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{validate_key, KeyValueStore, StorageError};

/// Stores each value as a JSON file under a data directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let path = self.path_for(key);

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        validate_key(key)?;
        let path = self.path_for(key);

        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| StorageError::io(format!("Failed to create directory: {}", e)))?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)
            .await
            .map_err(|e| StorageError::io(format!("Failed to write temporary file: {}", e)))?;

        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| StorageError::io(format!("Failed to rename file: {}", e)))?;

        tracing::debug!(key, path = %path.display(), "Stored value");
        Ok(())
    }
}
