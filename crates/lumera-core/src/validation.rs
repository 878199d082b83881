//! Answer scoring for every question kind, plus the structural check run when questions are authored.
//!
//! Keys and answers are free form JSON. Field names are the wire contract and some keys accept
//! several aliases, tried in order. Values of mixed JSON type are compared through [`stringify`].

mod blanks;
mod choice;
mod comparison;
mod criteria;
pub mod error;
mod matching;
mod sequencing;
mod structure;

pub use error::ValidationError;
pub use structure::check_structure;

use lumera_model::question::QuestionKind;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Pass mark for kinds with partial credit.
pub const PASS_THRESHOLD: f64 = 60.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Score {
    pub is_correct: bool,
    /// Between 0 and 100.
    pub score: f64,
}

impl Score {
    #[must_use]
    pub fn all_or_nothing(correct: bool) -> Self {
        Self {
            is_correct: correct,
            score: if correct { 100.0 } else { 0.0 },
        }
    }

    /// Percentage of `hits` out of `total`, passing at [`PASS_THRESHOLD`].
    #[must_use]
    pub fn partial(hits: usize, total: usize) -> Self {
        let score = ratio(hits, total);
        Self {
            is_correct: score >= PASS_THRESHOLD,
            score,
        }
    }
}

/// Scores `answer` against the validation `key` of a question of the stored `kind`.
pub fn validate_answer(kind: &str, key: &Value, answer: &Value) -> Result<Score, ValidationError> {
    let kind = QuestionKind::from_str(kind).map_err(|_| ValidationError::NotImplemented(kind.to_owned()))?;
    match kind {
        QuestionKind::MultipleChoice => choice::multiple_choice(key, answer),
        QuestionKind::TrueFalse => choice::true_false(key, answer),
        QuestionKind::FillBlanks => blanks::fill_blanks(key, answer),
        QuestionKind::DragDropMatching => matching::drag_drop_matching(key, answer),
        QuestionKind::Sequencing => sequencing::sequencing(key, answer),
        QuestionKind::CompareContrast => comparison::compare_contrast(key, answer),
        QuestionKind::CriteriaEvaluation => criteria::criteria_evaluation(key, answer),
        QuestionKind::OpenEnded | QuestionKind::ConceptMap => Err(ValidationError::ManualReviewRequired),
    }
}

/// Text form used to compare JSON values of different types. Whole floats print without a fraction
/// so that `2.0` and `"2"` compare equal.
#[must_use]
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() && float.fract() == 0.0 => format!("{float:.0}"),
            _ => number.to_string(),
        },
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub(crate) fn ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let hits = u32::try_from(hits).unwrap_or(u32::MAX);
    let total = u32::try_from(total).unwrap_or(u32::MAX);
    f64::from(hits) / f64::from(total) * 100.0
}

/// First alias present in `payload`.
pub(crate) fn lookup<'a>(payload: &'a Value, aliases: &[&'static str]) -> Option<&'a Value> {
    aliases.iter().find_map(|alias| payload.get(*alias))
}

pub(crate) fn key_field<'a>(key: &'a Value, aliases: &'static [&'static str]) -> Result<&'a Value, ValidationError> {
    lookup(key, aliases).ok_or(ValidationError::MissingKeyField(aliases))
}

pub(crate) fn key_object<'a>(
    key: &'a Value,
    aliases: &'static [&'static str],
) -> Result<(&'static str, &'a Map<String, Value>), ValidationError> {
    aliases
        .iter()
        .find_map(|alias| key.get(*alias).and_then(Value::as_object).map(|object| (*alias, object)))
        .ok_or(ValidationError::MissingKeyField(aliases))
}

pub(crate) fn key_array<'a>(
    key: &'a Value,
    aliases: &'static [&'static str],
) -> Result<(&'static str, &'a Vec<Value>), ValidationError> {
    aliases
        .iter()
        .find_map(|alias| key.get(*alias).and_then(Value::as_array).map(|array| (*alias, array)))
        .ok_or(ValidationError::MissingKeyField(aliases))
}

pub(crate) fn answer_field<'a>(answer: &'a Value, field: &'static str) -> Result<&'a Value, ValidationError> {
    answer.get(field).ok_or(ValidationError::MissingAnswerField(field))
}

pub(crate) fn answer_object<'a>(answer: &'a Value, field: &'static str) -> Result<&'a Map<String, Value>, ValidationError> {
    answer_field(answer, field)?
        .as_object()
        .ok_or(ValidationError::MissingAnswerField(field))
}
