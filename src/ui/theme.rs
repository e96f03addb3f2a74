use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

pub const DEFAULT_THEME: &str = "cyber-neon";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub text_dim: String,
    pub accent: String,
    pub accent_dim: String,
    pub border: String,
    pub border_focused: String,
    pub header_bg: String,
    pub header_fg: String,
    pub bar_filled: String,
    pub bar_empty: String,
    pub key_idle: String,
    pub key_correct: String,
    pub key_wrong: String,
    pub key_disabled: String,
    pub slot_empty: String,
    pub error: String,
    pub warning: String,
    pub success: String,
}

impl Theme {
    /// User themes in `<config_dir>/cyber-arena/themes/` shadow bundled ones.
    pub fn load(name: &str) -> Option<Self> {
        let user_theme_path = Config::config_dir()
            .join("themes")
            .join(format!("{name}.toml"));
        if let Ok(content) = fs::read_to_string(&user_theme_path) {
            match toml::from_str::<Theme>(&content) {
                Ok(theme) => return Some(theme),
                Err(e) => {
                    tracing::warn!(path = %user_theme_path.display(), error = %e, "bad user theme")
                }
            }
        }

        let file = ThemeAssets::get(&format!("{name}.toml"))?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        if let Ok(entries) = fs::read_dir(Config::config_dir().join("themes")) {
            names.extend(entries.filter_map(|e| {
                let name = e.ok()?.file_name().to_string_lossy().to_string();
                name.strip_suffix(".toml").map(str::to_string)
            }));
        }
        names.sort();
        names.dedup();
        names
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load(DEFAULT_THEME).unwrap_or_else(|| Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#0a0f0d".to_string(),
            fg: "#d7ffe9".to_string(),
            text_dim: "#5b7a6a".to_string(),
            accent: "#13ec80".to_string(),
            accent_dim: "#0b5c35".to_string(),
            border: "#1f3b2d".to_string(),
            border_focused: "#13ec80".to_string(),
            header_bg: "#102019".to_string(),
            header_fg: "#d7ffe9".to_string(),
            bar_filled: "#13ec80".to_string(),
            bar_empty: "#15261e".to_string(),
            key_idle: "#d7ffe9".to_string(),
            key_correct: "#13ec80".to_string(),
            key_wrong: "#ff3864".to_string(),
            key_disabled: "#2a3a32".to_string(),
            slot_empty: "#2f4d3e".to_string(),
            error: "#ff3864".to_string(),
            warning: "#ffd319".to_string(),
            success: "#13ec80".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn text_dim(&self) -> Color { Self::parse_color(&self.text_dim) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn accent_dim(&self) -> Color { Self::parse_color(&self.accent_dim) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn bar_filled(&self) -> Color { Self::parse_color(&self.bar_filled) }
    pub fn bar_empty(&self) -> Color { Self::parse_color(&self.bar_empty) }
    pub fn key_idle(&self) -> Color { Self::parse_color(&self.key_idle) }
    pub fn key_correct(&self) -> Color { Self::parse_color(&self.key_correct) }
    pub fn key_wrong(&self) -> Color { Self::parse_color(&self.key_wrong) }
    pub fn key_disabled(&self) -> Color { Self::parse_color(&self.key_disabled) }
    pub fn slot_empty(&self) -> Color { Self::parse_color(&self.slot_empty) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn warning(&self) -> Color { Self::parse_color(&self.warning) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_themes_parse() {
        for name in ["cyber-neon", "terminal-default"] {
            let file = ThemeAssets::get(&format!("{name}.toml")).unwrap();
            let theme: Theme = toml::from_str(std::str::from_utf8(&file.data).unwrap()).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn bundled_themes_are_listed() {
        let names = Theme::available_themes();
        assert!(names.iter().any(|n| n == "cyber-neon"));
        assert!(names.iter().any(|n| n == "terminal-default"));
    }

    #[test]
    fn parse_color_reads_hex() {
        assert_eq!(ThemeColors::parse_color("#13ec80"), Color::Rgb(0x13, 0xec, 0x80));
        assert_eq!(ThemeColors::parse_color("13ec80"), Color::Rgb(0x13, 0xec, 0x80));
        assert_eq!(ThemeColors::parse_color("nope"), Color::White);
    }

    #[test]
    fn unknown_theme_is_none() {
        assert!(Theme::load("no-such-theme-here").is_none());
    }
}
