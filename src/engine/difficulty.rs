use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

/// Tier, round time and base points assigned to a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DifficultyProfile {
    pub level: Difficulty,
    pub time_secs: u32,
    pub points: u32,
}

const HARD_HINT_LEN: usize = 300;
const HARD_ANSWER_LEN: usize = 10;
const MEDIUM_HINT_LEN: usize = 150;
const MEDIUM_ANSWER_LEN: usize = 6;

/// Long hints and long answers are harder; the first matching tier wins.
pub fn classify(hint_len: usize, answer_len: usize) -> DifficultyProfile {
    if hint_len > HARD_HINT_LEN || answer_len > HARD_ANSWER_LEN {
        DifficultyProfile {
            level: Difficulty::Hard,
            time_secs: 90,
            points: 300,
        }
    } else if hint_len > MEDIUM_HINT_LEN || answer_len > MEDIUM_ANSWER_LEN {
        DifficultyProfile {
            level: Difficulty::Medium,
            time_secs: 60,
            points: 150,
        }
    } else {
        DifficultyProfile {
            level: Difficulty::Easy,
            time_secs: 45,
            points: 100,
        }
    }
}
