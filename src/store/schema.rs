use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::engine::ledger::HighScoreEntry;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HighScoreData {
    pub schema_version: u32,
    #[serde(default)]
    pub high_scores: Vec<HighScoreEntry>,
}

impl Default for HighScoreData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            high_scores: Vec::new(),
        }
    }
}

impl HighScoreData {
    /// Check if loaded data has a stale schema version and needs reset.
    pub fn needs_reset(&self) -> bool {
        self.schema_version != SCHEMA_VERSION
    }
}

pub const EXPORT_VERSION: u32 = 1;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportData {
    pub export_version: u32,
    pub exported_at: DateTime<Utc>,
    pub config: Config,
    pub high_scores: HighScoreData,
}
