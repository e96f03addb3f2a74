use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

use crate::config::Config;
use crate::engine::ledger::HighScoreLedger;
use crate::store::schema::{EXPORT_VERSION, ExportData, HighScoreData};

const HIGH_SCORES_FILE: &str = "high_scores.json";

pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(Self::default_dir())
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)
            .with_context(|| format!("creating data dir {}", base_dir.display()))?;
        Ok(Self { base_dir })
    }

    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cyber-arena")
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    /// Missing or unreadable files yield `None`; the caller decides the fallback.
    fn load<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.file_path(name);
        if !path.exists() {
            return None;
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read store file");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "corrupt store file, ignoring");
                None
            }
        }
    }

    fn save<T: Serialize>(&self, name: &str, data: &T) -> Result<()> {
        let path = self.file_path(name);
        let tmp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(data)?;
        let mut file = fs::File::create(&tmp_path)
            .with_context(|| format!("creating {}", tmp_path.display()))?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    pub fn load_high_score_data(&self) -> HighScoreData {
        match self.load::<HighScoreData>(HIGH_SCORES_FILE) {
            Some(data) if data.needs_reset() => {
                tracing::warn!(
                    found = data.schema_version,
                    "high score schema mismatch, starting fresh"
                );
                HighScoreData::default()
            }
            Some(data) => data,
            None => HighScoreData::default(),
        }
    }

    pub fn load_high_scores(&self) -> HighScoreLedger {
        HighScoreLedger::new(self.load_high_score_data().high_scores)
    }

    pub fn save_high_scores(&self, ledger: &HighScoreLedger) -> Result<()> {
        let data = HighScoreData {
            high_scores: ledger.entries().to_vec(),
            ..HighScoreData::default()
        };
        self.save(HIGH_SCORES_FILE, &data)
    }

    /// Bundle the config and the ledger into one versioned document.
    pub fn export_all(&self, config: &Config) -> ExportData {
        ExportData {
            export_version: EXPORT_VERSION,
            exported_at: Utc::now(),
            config: config.clone(),
            high_scores: self.load_high_score_data(),
        }
    }

    /// Replaces the stored ledger with the imported one. The imported config
    /// is left for the caller to persist.
    pub fn import_all(&self, data: &ExportData) -> Result<()> {
        if data.export_version != EXPORT_VERSION {
            bail!(
                "Unsupported export version: {} (expected {})",
                data.export_version,
                EXPORT_VERSION
            );
        }
        let ledger = HighScoreLedger::new(data.high_scores.high_scores.clone());
        self.save_high_scores(&ledger)?;
        tracing::info!(entries = ledger.entries().len(), "high scores imported");
        Ok(())
    }

    pub fn write_export(path: &Path, data: &ExportData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn read_export(path: &Path) -> Result<ExportData> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let data = serde_json::from_str(&content)
            .with_context(|| format!("parsing export {}", path.display()))?;
        Ok(data)
    }
}
