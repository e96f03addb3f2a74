use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::filter::FilterMode;

pub const MAX_HIGH_SCORES: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub score: u32,
    pub mode: FilterMode,
}

/// Top scores across games, highest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighScoreLedger {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreLedger {
    /// Builds a ledger from persisted entries, restoring order and the cap.
    pub fn new(entries: Vec<HighScoreEntry>) -> Self {
        let mut ledger = Self { entries };
        ledger.normalize();
        ledger
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }

    /// Appends `entry` and keeps the best [`MAX_HIGH_SCORES`]. Returns whether
    /// the entry survived the cut.
    pub fn record(&mut self, entry: HighScoreEntry) -> bool {
        let id = entry.id.clone();
        self.entries.push(entry);
        self.normalize();
        self.entries.iter().any(|e| e.id == id)
    }

    // Stable sort: among equal scores the earlier entry ranks first.
    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
    }
}
