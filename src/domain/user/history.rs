//! Decision history - a capped, most-recent-first log of past analyses.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::AnalysisResult;
use crate::domain::decision::DecisionCategory;
use crate::domain::foundation::{DecisionId, Timestamp};

/// Maximum number of entries kept.
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// One submitted decision and the analysis it received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionHistoryEntry {
    pub id: DecisionId,
    pub date: Timestamp,
    pub category: DecisionCategory,
    pub decision: String,
    pub result: AnalysisResult,
}

impl DecisionHistoryEntry {
    /// Creates an entry stamped with a fresh id and the current time.
    pub fn record(
        category: DecisionCategory,
        decision: impl Into<String>,
        result: AnalysisResult,
    ) -> Self {
        Self {
            id: DecisionId::new(),
            date: Timestamp::now(),
            category,
            decision: decision.into(),
            result,
        }
    }
}

/// Ordered log, newest first, never longer than [`MAX_HISTORY_ENTRIES`].
///
/// Deserialization truncates oversized stored lists so the cap holds for
/// any value read back from storage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<DecisionHistoryEntry>", into = "Vec<DecisionHistoryEntry>")]
pub struct DecisionHistory {
    entries: Vec<DecisionHistoryEntry>,
}

impl DecisionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends an entry, evicting the oldest past the cap.
    pub fn record(&mut self, entry: DecisionHistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
    }

    pub fn entries(&self) -> &[DecisionHistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&DecisionHistoryEntry> {
        self.entries.first()
    }

    pub fn find(&self, id: DecisionId) -> Option<&DecisionHistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<DecisionHistoryEntry>> for DecisionHistory {
    fn from(mut entries: Vec<DecisionHistoryEntry>) -> Self {
        entries.truncate(MAX_HISTORY_ENTRIES);
        Self { entries }
    }
}

impl From<DecisionHistory> for Vec<DecisionHistoryEntry> {
    fn from(history: DecisionHistory) -> Self {
        history.entries
    }
}
