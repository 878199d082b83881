use super::{Score, ValidationError, answer_object, key_object, stringify};
use serde_json::{Map, Value};

const TABLE_KEY: &[&str] = &["tabla_correcta"];
const CLASSIFICATION_KEY: &[&str] = &["correct_classifications"];

/// Scores either a concept by criterion `tabla` or the older `classifications` map.
pub(super) fn compare_contrast(key: &Value, answer: &Value) -> Result<Score, ValidationError> {
    if answer.get("tabla").is_some() {
        table(key, answer_object(answer, "tabla")?)
    } else {
        classifications(key, answer_object(answer, "classifications")?)
    }
}

fn table(key: &Value, given: &Map<String, Value>) -> Result<Score, ValidationError> {
    let (alias, expected) = key_object(key, TABLE_KEY)?;
    let mut total = 0;
    let mut hits = 0;
    for (concept, criteria) in expected {
        let Some(criteria) = criteria.as_object() else {
            continue;
        };
        let row = given.get(concept).and_then(Value::as_object);
        for (criterion, cell) in criteria {
            total += 1;
            if row
                .and_then(|row| row.get(criterion))
                .is_some_and(|value| cell_matches(&stringify(value), &stringify(cell)))
            {
                hits += 1;
            }
        }
    }
    if total == 0 {
        return Err(ValidationError::EmptyKey(alias));
    }
    Ok(Score::partial(hits, total))
}

/// Case insensitive. Either side may contain the other.
fn cell_matches(given: &str, expected: &str) -> bool {
    let given = given.trim().to_lowercase();
    let expected = expected.trim().to_lowercase();
    if given.is_empty() || expected.is_empty() {
        return given == expected;
    }
    given == expected || given.contains(&expected) || expected.contains(&given)
}

fn classifications(key: &Value, given: &Map<String, Value>) -> Result<Score, ValidationError> {
    let (alias, expected) = key_object(key, CLASSIFICATION_KEY)?;
    if expected.is_empty() {
        return Err(ValidationError::EmptyKey(alias));
    }
    let hits = expected
        .iter()
        .filter(|(item, column)| {
            given
                .get(item.as_str())
                .is_some_and(|value| stringify(value) == stringify(column))
        })
        .count();
    Ok(Score::partial(hits, expected.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_tolerates_case_and_substrings() {
        let key = json!({"tabla_correcta": {
            "mitosis": {"células hijas": "2", "tipo": "somáticas"},
            "meiosis": {"células hijas": "4", "tipo": "sexuales"},
        }});
        let answer = json!({"tabla": {
            "mitosis": {"células hijas": 2, "tipo": "Células somáticas"},
            "meiosis": {"células hijas": "4", "tipo": "germinales"},
        }});
        let score = compare_contrast(&key, &answer).unwrap();
        assert_eq!(score.score, 75.0);
        assert!(score.is_correct);
    }

    #[test]
    fn test_table_missing_rows() {
        let key = json!({"tabla_correcta": {"a": {"x": "1", "y": "2"}}});
        let score = compare_contrast(&key, &json!({"tabla": {}})).unwrap();
        assert_eq!(score, Score { is_correct: false, score: 0.0 });

        assert!(matches!(
            compare_contrast(&json!({"tabla_correcta": {}}), &json!({"tabla": {}})),
            Err(ValidationError::EmptyKey("tabla_correcta"))
        ));
    }

    #[test]
    fn test_blank_cell_never_matches() {
        assert!(!cell_matches("", "somáticas"));
        assert!(!cell_matches("  ", "somáticas"));
        assert!(cell_matches("", ""));
        assert!(cell_matches("Células somáticas", "somáticas"));
    }

    #[test]
    fn test_legacy_classifications_are_exact() {
        let key = json!({"correct_classifications": {"0": "A", "1": "B", "2": "both"}});
        let answer = json!({"classifications": {"0": "A", "1": "b", "2": "both"}});
        let score = compare_contrast(&key, &answer).unwrap();
        assert!((score.score - 200.0 / 3.0).abs() < 1e-9);
        assert!(score.is_correct);
    }

    #[test]
    fn test_no_answer_shape() {
        assert!(matches!(
            compare_contrast(&json!({"correct_classifications": {"0": "A"}}), &json!({"columns": {}})),
            Err(ValidationError::MissingAnswerField("classifications"))
        ));
    }
}
