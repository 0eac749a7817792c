//! Key-Value Store Port - string-keyed local persistence.
//!
//! Values are opaque strings; callers serialize JSON into them. The profile
//! and history stores are built on top of this port.

use async_trait::async_trait;

/// Errors that can occur during key-value storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize value for {key}: {message}")]
    Serialization { key: String, message: String },
}

impl StorageError {
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    pub fn serialization(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Port for string-keyed persistence.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}

/// Keys must be usable as plain file names.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
