//! Offline conversion of raw exam records into bank-ready [`Question`]s.

use std::collections::{BTreeMap, HashSet};

use icu_normalizer::DecomposingNormalizerBorrowed;
use serde::Deserialize;

use crate::question::model::Question;

pub const MAX_ANSWER_CHARS: usize = 18;
pub const MIN_ANSWER_CHARS: usize = 3;
pub const MAX_ANSWER_WORDS: usize = 2;
pub const MISSING_HINT: &str = "Contexto indisponível.";

const TAG_MAP: &[(&str, &str)] = &[
    ("matematica", "MAT"),
    ("portugues", "LIN"),
    ("historia", "HIST"),
    ("geografia", "GEO"),
    ("biologia", "BIO"),
    ("fisica", "FIS"),
    ("quimica", "QUIM"),
    ("ingles", "ING"),
    ("espanhol", "ESP"),
    ("filosofia", "FILO"),
    ("sociologia", "SOC"),
    ("geral", "GERAL"),
];

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawAlternative {
    #[serde(default)]
    pub letra: String,
    #[serde(default)]
    pub texto: Option<String>,
}

/// Exam record as scraped, before any cleaning.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub materia: Option<String>,
    #[serde(default)]
    pub ano: Option<serde_json::Value>,
    #[serde(default)]
    pub enunciado: Option<String>,
    #[serde(default)]
    pub alternativas: Option<Vec<RawAlternative>>,
    #[serde(default)]
    pub resposta_correta: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    NoAnswer,
    LongText,
    BadTable,
}

#[derive(Clone, Debug, Default)]
pub struct CleaningReport {
    pub accepted: Vec<Question>,
    pub no_answer: usize,
    pub long_text: usize,
    pub bad_table: usize,
}

impl CleaningReport {
    pub fn rejected(&self) -> usize {
        self.no_answer + self.long_text + self.bad_table
    }
}

/// Strips accents and punctuation, leaving uppercase ASCII letters, digits
/// and spaces.
pub fn clean_answer(raw: &str) -> String {
    let raw = raw.strip_suffix('.').unwrap_or(raw);
    let decomposed = DecomposingNormalizerBorrowed::new_nfd().normalize(raw);
    let kept: String = decomposed
        .chars()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();
    kept.to_ascii_uppercase().trim().to_string()
}

pub fn clean_hint(raw: &str) -> String {
    raw.replace("##", "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn has_markdown_table(text: &str) -> bool {
    text.contains('|') || text.contains("---")
}

pub fn discipline_tag(materia: Option<&str>) -> String {
    let materia = materia.map(str::to_lowercase).unwrap_or_else(|| "geral".to_string());
    TAG_MAP
        .iter()
        .find(|(name, _)| *name == materia)
        .map(|(_, tag)| (*tag).to_string())
        .unwrap_or_else(|| materia.chars().take(4).collect::<String>().to_uppercase())
}

fn topic(ano: Option<&serde_json::Value>) -> String {
    let year = match ano {
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    };
    year.map_or_else(|| "Geral".to_string(), |y| format!("ENEM {y}"))
}

/// Converts one raw record. `index` is its position in the source file and
/// names records that carry no id.
pub fn convert(record: &RawRecord, index: usize) -> Result<Question, Rejection> {
    let (Some(correct), Some(alternatives)) = (&record.resposta_correta, &record.alternativas)
    else {
        return Err(Rejection::NoAnswer);
    };
    let text = alternatives
        .iter()
        .find(|alt| &alt.letra == correct)
        .and_then(|alt| alt.texto.as_deref())
        .filter(|t| !t.is_empty())
        .ok_or(Rejection::NoAnswer)?;

    let answer = clean_answer(text);
    let words = answer.split(' ').count();
    let len = answer.chars().count();
    if words > MAX_ANSWER_WORDS || len > MAX_ANSWER_CHARS || len < MIN_ANSWER_CHARS {
        return Err(Rejection::LongText);
    }

    let hint = record.enunciado.as_deref().unwrap_or(MISSING_HINT);
    if has_markdown_table(hint) {
        return Err(Rejection::BadTable);
    }

    Ok(Question {
        id: record
            .id
            .clone()
            .unwrap_or_else(|| format!("gen-{index}")),
        discipline: discipline_tag(record.materia.as_deref()),
        topic: topic(record.ano.as_ref()),
        hint: clean_hint(hint),
        answer,
    })
}

pub fn clean_all(records: &[RawRecord]) -> CleaningReport {
    let mut report = CleaningReport::default();
    for (index, record) in records.iter().enumerate() {
        match convert(record, index) {
            Ok(question) => report.accepted.push(question),
            Err(Rejection::NoAnswer) => report.no_answer += 1,
            Err(Rejection::LongText) => report.long_text += 1,
            Err(Rejection::BadTable) => report.bad_table += 1,
        }
    }
    report
}

/// Hand-maintained fixes applied after cleaning: questions that cannot be
/// played and answers that cleaned badly.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Curation {
    #[serde(default)]
    pub drop_ids: Vec<String>,
    #[serde(default)]
    pub answer_overrides: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurationOutcome {
    pub dropped: usize,
    pub corrected: Vec<(String, String, String)>,
}

impl Curation {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Removes dropped ids and rewrites overridden answers in place.
    pub fn apply(&self, questions: &mut Vec<Question>) -> CurationOutcome {
        let drop: HashSet<&str> = self.drop_ids.iter().map(String::as_str).collect();
        let before = questions.len();
        questions.retain(|q| !drop.contains(q.id.as_str()));

        let mut corrected = Vec::new();
        for question in questions.iter_mut() {
            if let Some(answer) = self.answer_overrides.get(&question.id) {
                let old = std::mem::replace(&mut question.answer, answer.clone());
                corrected.push((question.id.clone(), old, answer.clone()));
            }
        }

        CurationOutcome {
            dropped: before - questions.len(),
            corrected,
        }
    }
}

/// Questions whose answer contains a digit, which rarely make a fair puzzle.
pub fn numeric_answers(questions: &[Question]) -> Vec<&Question> {
    questions
        .iter()
        .filter(|q| q.answer.chars().any(|c| c.is_ascii_digit()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn record(answer_text: &str, enunciado: Option<&str>) -> RawRecord {
        RawRecord {
            id: Some("2023_questao_10".to_string()),
            materia: Some("historia".to_string()),
            ano: Some(serde_json::json!(2023)),
            enunciado: enunciado.map(str::to_string),
            alternativas: Some(vec![
                RawAlternative {
                    letra: "A".to_string(),
                    texto: Some("Outra coisa".to_string()),
                },
                RawAlternative {
                    letra: "B".to_string(),
                    texto: Some(answer_text.to_string()),
                },
            ]),
            resposta_correta: Some("B".to_string()),
        }
    }

    #[test]
    fn answer_loses_accents_punctuation_and_final_dot() {
        assert_eq!(clean_answer("Revolução."), "REVOLUCAO");
        assert_eq!(clean_answer("  El Niño "), "EL NINO");
        assert_eq!(clean_answer("gás-carbônico"), "GASCARBONICO");
        assert_eq!(clean_answer("CO₂"), "CO");
    }

    #[test]
    fn cleaned_answers_match_bank_alphabet() {
        let shape = Regex::new(r"^[A-Z0-9 ]*$").unwrap();
        for raw in ["Ação!", "Übermensch", "São Paulo.", "Ñandú", "x = 2"] {
            let cleaned = clean_answer(raw);
            assert!(shape.is_match(&cleaned), "{raw} -> {cleaned}");
        }
    }

    #[test]
    fn hint_collapses_whitespace_and_headers() {
        assert_eq!(clean_hint("## Texto I\n\n  O   autor\tdiz"), "Texto I O autor diz");
    }

    #[test]
    fn converts_a_good_record() {
        let q = convert(&record("Vargas", Some("Quem governou?")), 0).unwrap();
        assert_eq!(q.id, "2023_questao_10");
        assert_eq!(q.discipline, "HIST");
        assert_eq!(q.topic, "ENEM 2023");
        assert_eq!(q.hint, "Quem governou?");
        assert_eq!(q.answer, "VARGAS");
    }

    #[test]
    fn missing_pieces_get_defaults() {
        let mut raw = record("Vargas", None);
        raw.id = None;
        raw.materia = None;
        raw.ano = None;
        let q = convert(&raw, 7).unwrap();
        assert_eq!(q.id, "gen-7");
        assert_eq!(q.discipline, "GERAL");
        assert_eq!(q.topic, "Geral");
        assert_eq!(q.hint, MISSING_HINT);
    }

    #[test]
    fn string_year_is_accepted() {
        let mut raw = record("Vargas", Some("x"));
        raw.ano = Some(serde_json::json!("2021"));
        assert_eq!(convert(&raw, 0).unwrap().topic, "ENEM 2021");
    }

    #[test]
    fn rejects_answers_by_shape() {
        assert_eq!(convert(&record("Uma resposta longa", None), 0), Err(Rejection::LongText));
        assert_eq!(convert(&record("Pé", None), 0), Err(Rejection::LongText));
        assert_eq!(
            convert(&record("Constitucionalismo moderno", None), 0),
            Err(Rejection::LongText)
        );
        assert!(convert(&record("Dom Casmurro", None), 0).is_ok());
    }

    #[test]
    fn rejects_tables() {
        let q = convert(&record("Vargas", Some("| a | b |\n|---|---|")), 0);
        assert_eq!(q, Err(Rejection::BadTable));
    }

    #[test]
    fn rejects_missing_answer() {
        let mut raw = record("Vargas", None);
        raw.resposta_correta = Some("E".to_string());
        assert_eq!(convert(&raw, 0), Err(Rejection::NoAnswer));
        raw.resposta_correta = None;
        assert_eq!(convert(&raw, 0), Err(Rejection::NoAnswer));
    }

    #[test]
    fn unknown_subject_uses_prefix_tag() {
        assert_eq!(discipline_tag(Some("Literatura")), "LITE");
        assert_eq!(discipline_tag(Some("Matematica")), "MAT");
        assert_eq!(discipline_tag(None), "GERAL");
    }

    #[test]
    fn clean_all_counts_each_reason() {
        let mut no_answer = record("Vargas", None);
        no_answer.alternativas = None;
        let records = vec![
            record("Vargas", Some("ok")),
            record("Uma resposta longa", None),
            record("Vargas", Some("a | b")),
            no_answer,
        ];
        let report = clean_all(&records);
        assert_eq!(report.accepted.len(), 1);
        assert_eq!((report.no_answer, report.long_text, report.bad_table), (1, 1, 1));
        assert_eq!(report.rejected(), 3);
    }

    #[test]
    fn raw_records_parse_from_scraped_json() {
        let json = r#"[{"id":"x","materia":"fisica","ano":2022,"enunciado":"E",
            "alternativas":[{"letra":"A","texto":"Massa"}],"respostaCorreta":"A"}]"#;
        let records: Vec<RawRecord> = serde_json::from_str(json).unwrap();
        let report = clean_all(&records);
        assert_eq!(report.accepted[0].discipline, "FIS");
        assert_eq!(report.accepted[0].answer, "MASSA");
    }

    #[test]
    fn curation_drops_and_overrides() {
        let curation = Curation::from_toml(
            r#"
            drop_ids = ["b"]
            [answer_overrides]
            a = "GAS CARBONICO"
            "#,
        )
        .unwrap();
        let mut questions = vec![
            convert(&record("CO2", Some("x")), 0).unwrap(),
            convert(&record("Vargas", Some("y")), 1).unwrap(),
        ];
        questions[0].id = "a".to_string();
        questions[1].id = "b".to_string();

        let outcome = curation.apply(&mut questions);
        assert_eq!(outcome.dropped, 1);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer, "GAS CARBONICO");
        assert_eq!(
            outcome.corrected,
            vec![("a".to_string(), "CO2".to_string(), "GAS CARBONICO".to_string())]
        );
    }

    #[test]
    fn numeric_audit_flags_digits() {
        let questions = vec![
            convert(&record("CO2", Some("x")), 0).unwrap(),
            convert(&record("Vargas", Some("y")), 1).unwrap(),
        ];
        let flagged = numeric_answers(&questions);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].answer, "CO2");
    }
}
