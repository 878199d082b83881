use super::{Score, ValidationError, answer_object, key_object, stringify};
use serde_json::{Map, Value};

const BLANKS_KEY: &[&str] = &["correct_blanks", "respuestas_correctas"];

/// Each key blank may list several accepted strings. Case is ignored unless the key sets
/// `case_sensitive`.
pub(super) fn fill_blanks(key: &Value, answer: &Value) -> Result<Score, ValidationError> {
    let given = answer_object(answer, "blanks")?;
    let (alias, expected) = key_object(key, BLANKS_KEY)?;
    if expected.is_empty() {
        return Err(ValidationError::EmptyKey(alias));
    }
    let case_sensitive = key.get("case_sensitive").and_then(Value::as_bool).unwrap_or(false);

    let hits = expected
        .iter()
        .filter(|(blank, accepted)| {
            submitted(given, blank).is_some_and(|value| accepts(accepted, value, case_sensitive))
        })
        .count();
    Ok(Score::partial(hits, expected.len()))
}

/// Key blanks named `BLANK_n` match submitted blanks named `n`.
fn submitted<'a>(given: &'a Map<String, Value>, blank: &str) -> Option<&'a Value> {
    given
        .get(blank)
        .or_else(|| blank.strip_prefix("BLANK_").and_then(|bare| given.get(bare)))
}

fn accepts(accepted: &Value, value: &Value, case_sensitive: bool) -> bool {
    let value = normalize(&stringify(value), case_sensitive);
    match accepted {
        Value::Array(options) => options
            .iter()
            .any(|option| normalize(&stringify(option), case_sensitive) == value),
        single => normalize(&stringify(single), case_sensitive) == value,
    }
}

fn normalize(text: &str, case_sensitive: bool) -> String {
    let text = text.trim();
    if case_sensitive { text.to_owned() } else { text.to_lowercase() }
}
