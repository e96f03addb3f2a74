use std::fs;
use std::path::Path;

use rust_embed::Embed;
use thiserror::Error;

use crate::question::model::Question;

#[derive(Embed)]
#[folder = "assets/data/"]
struct BankAssets;

const EMBEDDED_BANK: &str = "questions.json";

#[derive(Debug, Error)]
pub enum QuestionBankError {
    #[error("failed to read question file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("question data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("embedded question bank is missing")]
    MissingEmbedded,
    #[error("question bank is empty")]
    Empty,
}

/// Read-only, non-empty, ordered collection of questions.
///
/// Non-emptiness is checked once at construction, so selection can always
/// draw from the full bank as a fallback pool.
#[derive(Clone, Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }
        Ok(Self { questions })
    }

    pub fn from_json(json: &str) -> Result<Self, QuestionBankError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    pub fn load_file(path: &Path) -> Result<Self, QuestionBankError> {
        let content = fs::read_to_string(path).map_err(|source| QuestionBankError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// The bank compiled into the binary.
    pub fn embedded() -> Result<Self, QuestionBankError> {
        let file = BankAssets::get(EMBEDDED_BANK).ok_or(QuestionBankError::MissingEmbedded)?;
        let content = String::from_utf8_lossy(file.data.as_ref());
        Self::from_json(&content)
    }

    /// Load from `path` when given, otherwise use the embedded bank.
    pub fn load(path: Option<&Path>) -> Result<Self, QuestionBankError> {
        match path {
            Some(path) => Self::load_file(path),
            None => Self::embedded(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
