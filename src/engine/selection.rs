use rand::Rng;

use crate::engine::difficulty::{self, Difficulty};
use crate::engine::filter::FilterMode;
use crate::question::bank::QuestionBank;
use crate::question::model::Question;

/// A question drawn for one round, with its difficulty fixed at selection time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundQuestion {
    pub question: Question,
    pub difficulty: Difficulty,
    pub time_secs: u32,
    pub points_value: u32,
    answer: Vec<char>,
}

impl RoundQuestion {
    pub fn new(question: &Question) -> Self {
        let mut question = question.clone();
        question.answer = question.answer.to_uppercase();
        let answer: Vec<char> = question.answer.chars().collect();
        let profile = difficulty::classify(question.hint_len(), answer.len());
        Self {
            question,
            difficulty: profile.level,
            time_secs: profile.time_secs,
            points_value: profile.points,
            answer,
        }
    }

    pub fn answer(&self) -> &[char] {
        &self.answer
    }

    pub fn answer_len(&self) -> usize {
        self.answer.len()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.answer.contains(&ch)
    }
}

/// Uniform draw from the questions admitted by `mode`, falling back to the
/// whole bank when no question carries an admitted tag.
pub fn select<'a, R: Rng + ?Sized>(
    mode: FilterMode,
    bank: &'a QuestionBank,
    rng: &mut R,
) -> &'a Question {
    let filtered: Vec<&Question> = bank.iter().filter(|q| mode.admits(&q.discipline)).collect();
    let pool = if filtered.is_empty() {
        tracing::debug!(mode = %mode, "no questions for filter, using full bank");
        bank.iter().collect()
    } else {
        filtered
    };
    // QuestionBank is non-empty by construction.
    pool[rng.gen_range(0..pool.len())]
}
