//! In-Memory Key-Value Store Adapter
//!
//! Keeps values in a shared map. Used by tests and by the `memory` storage
//! backend, where nothing should outlive the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{validate_key, KeyValueStore, StorageError};

/// In-memory key-value storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    values: Arc<RwLock<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following `set` fail with an IO error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw stored value, bypassing key validation.
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.values.read().await.get(key).cloned()
    }

    /// Stores a raw value, e.g. a corrupt payload.
    pub async fn insert_raw(&self, key: &str, value: impl Into<String>) {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.into());
    }

    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        validate_key(key)?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::io("simulated write failure"));
        }
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
