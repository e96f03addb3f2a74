use chrono::Utc;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::audio::Cue;
use crate::engine::filter::FilterMode;
use crate::engine::keyboard::{self, KeyStatus, KeyboardKey};
use crate::engine::ledger::{HighScoreEntry, HighScoreLedger};
use crate::engine::scoring;
use crate::engine::selection::{self, RoundQuestion};
use crate::question::bank::QuestionBank;

pub const STARTING_POWERUPS: u32 = 3;
pub const DEFAULT_TIME_SECS: u32 = 60;
pub const CLUTCH_SECS: u32 = 10;
const CORRECT_TIME_BONUS: u32 = 2;
const WRONG_TIME_PENALTY: u32 = 5;
const TRASH_KEY_COUNT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Playing,
    GameOver,
    Victory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerupInventory {
    pub reveal: u32,
    pub trash: u32,
}

impl Default for PowerupInventory {
    fn default() -> Self {
        Self {
            reveal: STARTING_POWERUPS,
            trash: STARTING_POWERUPS,
        }
    }
}

/// Side effects requested by a transition, dispatched by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Play(Cue),
    HighScoresChanged,
}

/// One player's game: the round in progress, the running score and the
/// high-score ledger it feeds.
///
/// Every operation is a guarded mutator. Calls that do not apply to the
/// current state (wrong status, reading phase, empty inventory) leave the
/// session untouched and queue no effects.
pub struct GameSession {
    bank: QuestionBank,
    rng: SmallRng,
    status: GameStatus,
    score: u32,
    streak: u32,
    time_left: u32,
    level: u32,
    powerups: PowerupInventory,
    filter_mode: FilterMode,
    is_reading: bool,
    current: Option<RoundQuestion>,
    revealed: Vec<Option<char>>,
    keyboard: Vec<KeyboardKey>,
    ledger: HighScoreLedger,
    effects: Vec<Effect>,
}

impl GameSession {
    pub fn new(bank: QuestionBank, ledger: HighScoreLedger) -> Self {
        Self::with_rng(bank, ledger, SmallRng::from_entropy())
    }

    pub fn with_seed(bank: QuestionBank, ledger: HighScoreLedger, seed: u64) -> Self {
        Self::with_rng(bank, ledger, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(bank: QuestionBank, ledger: HighScoreLedger, rng: SmallRng) -> Self {
        Self {
            bank,
            rng,
            status: GameStatus::Idle,
            score: 0,
            streak: 0,
            time_left: DEFAULT_TIME_SECS,
            level: 0,
            powerups: PowerupInventory::default(),
            filter_mode: FilterMode::default(),
            is_reading: false,
            current: None,
            revealed: Vec::new(),
            keyboard: Vec::new(),
            ledger,
            effects: Vec::new(),
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn powerups(&self) -> PowerupInventory {
        self.powerups
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn is_reading(&self) -> bool {
        self.is_reading
    }

    pub fn current(&self) -> Option<&RoundQuestion> {
        self.current.as_ref()
    }

    pub fn revealed(&self) -> &[Option<char>] {
        &self.revealed
    }

    pub fn keyboard(&self) -> &[KeyboardKey] {
        &self.keyboard
    }

    pub fn ledger(&self) -> &HighScoreLedger {
        &self.ledger
    }

    /// Allotted time of the current round, for drawing the timer bar.
    pub fn round_time(&self) -> u32 {
        self.current
            .as_ref()
            .map(|r| r.time_secs)
            .unwrap_or(DEFAULT_TIME_SECS)
    }

    pub fn is_clutch(&self) -> bool {
        self.accepts_input() && self.time_left < CLUTCH_SECS
    }

    /// Playing, past the reading phase, with a question on the board.
    pub fn accepts_input(&self) -> bool {
        self.status == GameStatus::Playing && !self.is_reading && self.current.is_some()
    }

    pub fn key_status(&self, ch: char) -> Option<KeyStatus> {
        self.keyboard.iter().find(|k| k.ch == ch).map(|k| k.status)
    }

    /// Whether the keypad should offer `ch` right now: the key exists, and it
    /// is either untouched or a correct letter with slots still hidden (a
    /// reveal can mark a repeated letter correct before all its slots show).
    pub fn is_guessable(&self, ch: char) -> bool {
        if !self.accepts_input() {
            return false;
        }
        match self.key_status(ch) {
            Some(KeyStatus::Idle) => true,
            Some(KeyStatus::Correct) => self.has_hidden(ch),
            _ => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.revealed.is_empty() && self.revealed.iter().all(Option::is_some)
    }

    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.filter_mode = mode;
    }

    pub fn start_game(&mut self) {
        self.score = 0;
        self.streak = 0;
        self.level = 1;
        self.powerups = PowerupInventory::default();
        self.load_round();
        tracing::info!(mode = %self.filter_mode, "game started");
    }

    /// Ends the reading phase so the clock runs and guesses count.
    pub fn start_round(&mut self) {
        if self.status != GameStatus::Playing || !self.is_reading {
            return;
        }
        self.is_reading = false;
        tracing::debug!(level = self.level, "round clock started");
    }

    /// Advances to a fresh question after a cleared round, carrying score,
    /// streak and power-ups over.
    pub fn next_level(&mut self) {
        if self.status != GameStatus::Victory {
            return;
        }
        self.level += 1;
        self.load_round();
    }

    pub fn tick_timer(&mut self) {
        if self.status != GameStatus::Playing || self.is_reading {
            return;
        }
        if self.time_left > 0 {
            self.time_left -= 1;
        } else {
            self.lose();
        }
    }

    pub fn submit_guess(&mut self, letter: char) {
        if !self.accepts_input() {
            return;
        }
        let letter = letter.to_ascii_uppercase();
        let key_idx = self.keyboard.iter().position(|k| k.ch == letter);
        if key_idx.is_some_and(|idx| self.keyboard[idx].status == KeyStatus::Disabled) {
            return;
        }
        let Some(round) = self.current.as_ref() else {
            return;
        };

        if round.contains(letter) {
            let points_value = round.points_value;
            let answer_len = round.answer_len();
            for (slot, &ch) in self.revealed.iter_mut().zip(round.answer()) {
                if ch == letter {
                    *slot = Some(ch);
                }
            }
            if let Some(idx) = key_idx {
                self.keyboard[idx].mark(KeyStatus::Correct);
            }

            let gained = scoring::guess_points(points_value, answer_len, self.streak);
            self.score += gained;
            self.streak += 1;
            self.time_left += CORRECT_TIME_BONUS;
            self.effects.push(Effect::Play(Cue::Hit));
            tracing::debug!(%letter, gained, streak = self.streak, "correct guess");

            if self.is_complete() {
                let bonus = scoring::clear_bonus(self.time_left);
                self.score += bonus;
                self.win();
                tracing::debug!(bonus, "answer cleared by guess");
            }
        } else {
            if let Some(idx) = key_idx {
                self.keyboard[idx].mark(KeyStatus::Wrong);
            }
            self.streak = 0;
            self.time_left = self.time_left.saturating_sub(WRONG_TIME_PENALTY);
            tracing::debug!(%letter, time_left = self.time_left, "wrong guess");

            if self.time_left == 0 {
                self.lose();
            } else {
                self.effects.push(Effect::Play(Cue::Miss));
            }
        }
    }

    pub fn use_reveal_powerup(&mut self) {
        if !self.accepts_input() || self.powerups.reveal == 0 {
            return;
        }
        let hidden: Vec<usize> = self
            .revealed
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(idx, _)| idx)
            .collect();
        let Some(&idx) = hidden.choose(&mut self.rng) else {
            return;
        };
        let Some(ch) = self.current.as_ref().and_then(|r| r.answer().get(idx).copied()) else {
            return;
        };

        self.revealed[idx] = Some(ch);
        if let Some(key) = self.keyboard.iter_mut().find(|k| k.ch == ch) {
            key.mark(KeyStatus::Correct);
        }
        self.powerups.reveal -= 1;
        self.effects.push(Effect::Play(Cue::Hit));
        tracing::debug!(slot = idx, left = self.powerups.reveal, "reveal used");

        // No clear bonus on this path.
        if self.is_complete() {
            self.win();
        }
    }

    pub fn use_trash_powerup(&mut self) {
        if !self.accepts_input() || self.powerups.trash == 0 {
            return;
        }
        let Some(round) = self.current.as_ref() else {
            return;
        };
        let candidates: Vec<usize> = self
            .keyboard
            .iter()
            .enumerate()
            .filter(|(_, k)| k.is_idle() && !round.contains(k.ch))
            .map(|(idx, _)| idx)
            .collect();
        if candidates.is_empty() {
            return;
        }

        let picked: Vec<usize> = candidates
            .choose_multiple(&mut self.rng, TRASH_KEY_COUNT)
            .copied()
            .collect();
        for &idx in &picked {
            self.keyboard[idx].mark(KeyStatus::Disabled);
        }
        self.powerups.trash -= 1;
        tracing::debug!(removed = picked.len(), left = self.powerups.trash, "trash used");
    }

    /// Abandons the game and returns to the menu. High scores, the filter
    /// and the power-up inventory are kept.
    pub fn reset_game(&mut self) {
        self.status = GameStatus::Idle;
        self.score = 0;
        self.time_left = DEFAULT_TIME_SECS;
        self.is_reading = false;
    }

    fn load_round(&mut self) {
        let question = selection::select(self.filter_mode, &self.bank, &mut self.rng);
        let round = RoundQuestion::new(question);

        self.time_left = round.time_secs;
        self.keyboard = keyboard::generate(&round.question.answer, &mut self.rng);
        self.revealed = vec![None; round.answer_len()];
        self.is_reading = true;
        self.status = GameStatus::Playing;
        tracing::debug!(
            id = %round.question.id,
            difficulty = round.difficulty.as_str(),
            time = round.time_secs,
            level = self.level,
            "round loaded"
        );
        self.current = Some(round);
    }

    fn has_hidden(&self, ch: char) -> bool {
        let Some(round) = self.current.as_ref() else {
            return false;
        };
        self.revealed
            .iter()
            .zip(round.answer())
            .any(|(slot, &c)| slot.is_none() && c == ch)
    }

    fn win(&mut self) {
        self.status = GameStatus::Victory;
        self.effects.push(Effect::Play(Cue::Win));
        tracing::info!(score = self.score, level = self.level, "round cleared");
    }

    fn lose(&mut self) {
        self.time_left = 0;
        self.status = GameStatus::GameOver;
        self.effects.push(Effect::Play(Cue::GameOver));
        tracing::info!(score = self.score, level = self.level, "game over");

        if self.score > 0 {
            let now = Utc::now();
            let entry = HighScoreEntry {
                id: format!("{}-{:08x}", now.timestamp_millis(), self.rng.r#gen::<u32>()),
                date: now,
                score: self.score,
                mode: self.filter_mode,
            };
            let kept = self.ledger.record(entry);
            self.effects.push(Effect::HighScoresChanged);
            tracing::info!(score = self.score, kept, "high score recorded");
        }
    }
}
