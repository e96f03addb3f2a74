use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse subject-area restriction applied to question selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterMode {
    #[default]
    Mix,
    Hum,
    Nat,
    Lin,
}

pub const ALL_MODES: [FilterMode; 4] = [
    FilterMode::Mix,
    FilterMode::Hum,
    FilterMode::Nat,
    FilterMode::Lin,
];

const HUM_TAGS: &[&str] = &["HIST", "GEO", "FILO", "SOC"];
const NAT_TAGS: &[&str] = &["MAT", "FIS", "QUIM", "BIO"];
// Literature, arts and PE get their tags from the 4-letter fallback of the cleaner.
const LIN_TAGS: &[&str] = &["LIN", "LITE", "ING", "ESP", "ARTE", "EDUC"];

impl FilterMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::Mix => "MIX",
            FilterMode::Hum => "HUM",
            FilterMode::Nat => "NAT",
            FilterMode::Lin => "LIN",
        }
    }

    /// Discipline tags admitted by this mode. `None` means every tag.
    pub fn allowed_tags(self) -> Option<&'static [&'static str]> {
        match self {
            FilterMode::Mix => None,
            FilterMode::Hum => Some(HUM_TAGS),
            FilterMode::Nat => Some(NAT_TAGS),
            FilterMode::Lin => Some(LIN_TAGS),
        }
    }

    pub fn admits(self, discipline: &str) -> bool {
        match self.allowed_tags() {
            None => true,
            Some(tags) => tags.contains(&discipline),
        }
    }

    pub fn next(self) -> Self {
        let idx = ALL_MODES.iter().position(|&m| m == self).unwrap_or(0);
        ALL_MODES[(idx + 1) % ALL_MODES.len()]
    }

    pub fn prev(self) -> Self {
        let idx = ALL_MODES.iter().position(|&m| m == self).unwrap_or(0);
        ALL_MODES[(idx + ALL_MODES.len() - 1) % ALL_MODES.len()]
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MIX" => Ok(FilterMode::Mix),
            "HUM" => Ok(FilterMode::Hum),
            "NAT" => Ok(FilterMode::Nat),
            "LIN" => Ok(FilterMode::Lin),
            other => Err(format!("unknown filter mode: {other} (expected MIX, HUM, NAT or LIN)")),
        }
    }
}
