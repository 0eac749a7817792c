//! Typed stores over the key-value port.
//!
//! Reads are best effort: a missing key, an unreadable store or a value
//! that no longer parses all read as "nothing stored". Writes report
//! their errors and leave the decision of what to do to the caller.

mod history_store;
mod profile_store;

pub use history_store::{HistoryStore, HISTORY_KEY};
pub use profile_store::{ProfileStore, PROFILE_KEY};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ports::{KeyValueStore, StorageError};

async fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read stored value, treating as absent");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored value is corrupt, treating as absent");
            None
        }
    }
}

async fn save_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json =
        serde_json::to_string(value).map_err(|e| StorageError::serialization(key, e.to_string()))?;
    store.set(key, json).await
}
