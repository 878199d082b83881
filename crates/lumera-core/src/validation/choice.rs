use super::{Score, ValidationError, answer_field, key_field, stringify};
use serde_json::Value;

const CHOICE_KEY: &[&str] = &["respuesta_correcta"];
const TRUE_FALSE_KEY: &[&str] = &["correct_answer", "respuesta_correcta", "es_verdadero"];

/// Accepts the choice itself or its zero based index, which maps to a letter.
pub(super) fn multiple_choice(key: &Value, answer: &Value) -> Result<Score, ValidationError> {
    let selected = answer_field(answer, "selected")?;
    let expected = stringify(key_field(key, CHOICE_KEY)?);

    let as_letter = selected
        .as_u64()
        .and_then(|index| u8::try_from(index).ok())
        .filter(|index| *index < 26)
        .map(|index| char::from(b'A' + index).to_string());

    let correct = stringify(selected) == expected || as_letter.is_some_and(|letter| letter == expected);
    Ok(Score::all_or_nothing(correct))
}

pub(super) fn true_false(key: &Value, answer: &Value) -> Result<Score, ValidationError> {
    let given = normalize_truth(answer_field(answer, "answer")?);
    let expected = normalize_truth(key_field(key, TRUE_FALSE_KEY)?);
    Ok(Score::all_or_nothing(given == expected))
}

fn normalize_truth(value: &Value) -> String {
    let text = stringify(value).trim().to_lowercase();
    match text.as_str() {
        "verdadero" | "v" => "true".to_owned(),
        "falso" | "f" => "false".to_owned(),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_index_maps_to_letter() {
        let key = json!({"respuesta_correcta": "B"});
        assert!(multiple_choice(&key, &json!({"selected": 1})).unwrap().is_correct);
        assert!(!multiple_choice(&key, &json!({"selected": 0})).unwrap().is_correct);
        assert!(multiple_choice(&key, &json!({"selected": "B"})).unwrap().is_correct);
        assert_eq!(multiple_choice(&key, &json!({"selected": "b"})).unwrap().score, 0.0);
    }

    #[test]
    fn test_choice_stored_as_value() {
        let key = json!({"respuesta_correcta": 3});
        assert!(multiple_choice(&key, &json!({"selected": "3"})).unwrap().is_correct);
    }

    #[test]
    fn test_missing_fields() {
        let key = json!({"respuesta_correcta": "A"});
        assert!(matches!(
            multiple_choice(&key, &json!({"choice": "A"})),
            Err(ValidationError::MissingAnswerField("selected"))
        ));
        assert!(matches!(
            multiple_choice(&json!({}), &json!({"selected": "A"})),
            Err(ValidationError::MissingKeyField(_))
        ));
    }

    #[test]
    fn test_true_false_aliases() {
        let answer = json!({"answer": true});
        assert_eq!(true_false(&json!({"correct_answer": true}), &answer).unwrap().score, 100.0);
        assert!(true_false(&json!({"respuesta_correcta": "true"}), &answer).unwrap().is_correct);
        assert!(true_false(&json!({"es_verdadero": "Verdadero"}), &answer).unwrap().is_correct);
        assert!(!true_false(&json!({"es_verdadero": false}), &answer).unwrap().is_correct);
        // first alias wins
        let both = json!({"correct_answer": false, "respuesta_correcta": true});
        assert!(!true_false(&both, &answer).unwrap().is_correct);
    }
}
