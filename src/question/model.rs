use serde::{Deserialize, Serialize};

/// One pre-cleaned exam question as shipped in the question bank.
///
/// `answer` is uppercase alphanumeric with at most one internal space; the
/// cleaning pipeline guarantees this and the engine does not re-validate it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub discipline: String,
    pub topic: String,
    pub hint: String,
    pub answer: String,
}

impl Question {
    pub fn hint_len(&self) -> usize {
        self.hint.chars().count()
    }

    pub fn answer_len(&self) -> usize {
        self.answer.chars().count()
    }
}
