use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

pub const KEYBOARD_SIZE: usize = 15;

/// Common distractor letters mixed into every keypad.
pub const FILLER_LETTERS: [char; 14] = [
    'X', 'A', 'B', 'Z', 'M', 'R', 'S', 'T', 'L', 'C', 'V', 'P', 'E', 'O',
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStatus {
    Idle,
    Correct,
    Wrong,
    Disabled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardKey {
    pub ch: char,
    pub status: KeyStatus,
}

impl KeyboardKey {
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            status: KeyStatus::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.status == KeyStatus::Idle
    }

    /// Only idle keys move; every other status is final for the round.
    pub fn mark(&mut self, status: KeyStatus) -> bool {
        if self.is_idle() && status != KeyStatus::Idle {
            self.status = status;
            true
        } else {
            false
        }
    }
}

/// Keypad for `answer`: its distinct characters first, then fillers, capped at
/// [`KEYBOARD_SIZE`] and shuffled. Answer characters survive the cap as long as
/// the answer itself has at most [`KEYBOARD_SIZE`] distinct characters.
pub fn generate<R: Rng + ?Sized>(answer: &str, rng: &mut R) -> Vec<KeyboardKey> {
    let mut pool: Vec<char> = Vec::with_capacity(KEYBOARD_SIZE);
    for ch in answer.chars().chain(FILLER_LETTERS) {
        if pool.len() == KEYBOARD_SIZE {
            break;
        }
        if !pool.contains(&ch) {
            pool.push(ch);
        }
    }
    pool.shuffle(rng);
    pool.into_iter().map(KeyboardKey::new).collect()
}
