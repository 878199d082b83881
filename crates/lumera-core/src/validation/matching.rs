use super::{Score, ValidationError, answer_object, key_object, stringify};
use serde_json::Value;

const MATCHES_KEY: &[&str] = &["correct_matches", "emparejamientos_correctos"];

pub(super) fn drag_drop_matching(key: &Value, answer: &Value) -> Result<Score, ValidationError> {
    let given = answer_object(answer, "matches")?;
    let (alias, expected) = key_object(key, MATCHES_KEY)?;
    if expected.is_empty() {
        return Err(ValidationError::EmptyKey(alias));
    }
    let hits = expected
        .iter()
        .filter(|(term, target)| {
            given
                .get(term.as_str())
                .is_some_and(|value| stringify(value) == stringify(target))
        })
        .count();
    Ok(Score::partial(hits, expected.len()))
}
