use super::{Score, ValidationError, answer_field, key_array, ratio, stringify};
use serde_json::Value;

const SEQUENCE_KEY: &[&str] = &["correct_sequence", "orden_correcto"];

/// Partial credit is reported, but only a perfect order counts as correct.
pub(super) fn sequencing(key: &Value, answer: &Value) -> Result<Score, ValidationError> {
    let given = answer_field(answer, "sequence")?
        .as_array()
        .ok_or(ValidationError::MissingAnswerField("sequence"))?;
    let (alias, expected) = key_array(key, SEQUENCE_KEY)?;
    if expected.is_empty() {
        return Err(ValidationError::EmptyKey(alias));
    }

    if given.len() != expected.len() {
        return Ok(Score::all_or_nothing(false));
    }
    let hits = given
        .iter()
        .zip(expected)
        .filter(|(given, expected)| stringify(given) == stringify(expected))
        .count();
    Ok(Score {
        is_correct: hits == expected.len(),
        score: ratio(hits, expected.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_position_wrong() {
        let key = json!({"correct_sequence": [0, 1, 2, 3]});
        let score = sequencing(&key, &json!({"sequence": [0, 1, 3, 3]})).unwrap();
        assert_eq!(score.score, 75.0);
        assert!(!score.is_correct);
    }

    #[test]
    fn test_perfect_order_with_alias() {
        let key = json!({"orden_correcto": ["semilla", "brote", "planta"]});
        let score = sequencing(&key, &json!({"sequence": ["semilla", "brote", "planta"]})).unwrap();
        assert_eq!(score, Score { is_correct: true, score: 100.0 });
    }

    #[test]
    fn test_length_mismatch() {
        let key = json!({"correct_sequence": [0, 1, 2]});
        let score = sequencing(&key, &json!({"sequence": [0, 1]})).unwrap();
        assert_eq!(score, Score { is_correct: false, score: 0.0 });
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let key = json!({"correct_sequence": []});
        assert!(matches!(
            sequencing(&key, &json!({"sequence": []})),
            Err(ValidationError::EmptyKey("correct_sequence"))
        ));
        let key = json!({"orden_correcto": []});
        assert!(matches!(
            sequencing(&key, &json!({"sequence": ["a"]})),
            Err(ValidationError::EmptyKey("orden_correcto"))
        ));
    }
}
