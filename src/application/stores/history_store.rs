//! HistoryStore - persisted [`DecisionHistory`].

use std::sync::Arc;

use super::{load_json, save_json};
use crate::domain::user::{DecisionHistory, DecisionHistoryEntry};
use crate::ports::{KeyValueStore, StorageError};

pub const HISTORY_KEY: &str = "decisionHistory";

#[derive(Clone)]
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored history, or an empty one when nothing usable is stored.
    pub async fn load(&self) -> DecisionHistory {
        load_json(self.store.as_ref(), HISTORY_KEY)
            .await
            .unwrap_or_default()
    }

    pub async fn save(&self, history: &DecisionHistory) -> Result<(), StorageError> {
        save_json(self.store.as_ref(), HISTORY_KEY, history).await
    }

    /// Prepends `entry` to the stored history and writes it back.
    pub async fn record(
        &self,
        entry: DecisionHistoryEntry,
    ) -> Result<DecisionHistory, StorageError> {
        let mut history = self.load().await;
        history.record(entry);
        self.save(&history).await?;
        Ok(history)
    }
}
