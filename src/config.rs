use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::filter::FilterMode;

pub const SUPPORTED_LOCALES: &[&str] = &["en", "pt-BR"];
const APP_DIR: &str = "cyber-arena";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub filter_mode: FilterMode,
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
    #[serde(default = "default_sfx_volume")]
    pub sfx_volume: f32,
    #[serde(default)]
    pub question_file: Option<PathBuf>,
}

fn default_theme() -> String {
    "cyber-neon".to_string()
}
fn default_locale() -> String {
    "en".to_string()
}
fn default_sound_enabled() -> bool {
    true
}
fn default_sfx_volume() -> f32 {
    0.5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            locale: default_locale(),
            filter_mode: FilterMode::default(),
            sound_enabled: default_sound_enabled(),
            sfx_volume: default_sfx_volume(),
            question_file: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Clamp values and reset unknown names to defaults.
    /// Call after deserialization to handle hand-edited or stale files.
    pub fn validate(&mut self, valid_themes: &[&str]) {
        if !self.sfx_volume.is_finite() {
            self.sfx_volume = default_sfx_volume();
        }
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        if !SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            self.locale = default_locale();
        }
        if !valid_themes.contains(&self.theme.as_str()) {
            self.theme = default_theme();
        }
    }
}
