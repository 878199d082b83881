use super::{Score, ValidationError, answer_object, key_object, PASS_THRESHOLD};
use serde_json::Value;

const RATINGS_KEY: &[&str] = &["expected_ratings"];
const DEFAULT_TOLERANCE: f64 = 1.0;

/// Mean of per criterion scores over the criteria rated on both sides.
pub(super) fn criteria_evaluation(key: &Value, answer: &Value) -> Result<Score, ValidationError> {
    let given = answer_object(answer, "ratings")?;
    let (_, expected) = key_object(key, RATINGS_KEY)?;
    let tolerance = key.get("tolerance").and_then(Value::as_f64).unwrap_or(DEFAULT_TOLERANCE);

    let scores: Vec<f64> = expected
        .iter()
        .filter_map(|(criterion, expected)| {
            let given = given.get(criterion).and_then(rating)?;
            Some(band((given - rating(expected)?).abs(), tolerance))
        })
        .collect();
    if scores.is_empty() {
        return Err(ValidationError::NoOverlap);
    }
    let count = u32::try_from(scores.len()).unwrap_or(u32::MAX);
    let score = scores.iter().sum::<f64>() / f64::from(count);
    Ok(Score {
        is_correct: score >= PASS_THRESHOLD,
        score,
    })
}

fn rating(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn band(difference: f64, tolerance: f64) -> f64 {
    if difference == 0.0 {
        100.0
    } else if difference <= tolerance {
        60.0
    } else if difference <= tolerance * 2.0 {
        30.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tolerance_bands() {
        let key = json!({"expected_ratings": {"a": 4, "b": 3, "c": 5, "d": 1}});
        let answer = json!({"ratings": {"a": 4, "b": 4, "c": 3, "d": 5}});
        let score = criteria_evaluation(&key, &answer).unwrap();
        // 100, 60, 30, 0
        assert_eq!(score.score, 47.5);
        assert!(!score.is_correct);
    }

    #[test]
    fn test_custom_tolerance_and_partial_overlap() {
        let key = json!({"expected_ratings": {"a": 4, "b": 2}, "tolerance": 2.0});
        let answer = json!({"ratings": {"a": "2", "x": 1}});
        let score = criteria_evaluation(&key, &answer).unwrap();
        assert_eq!(score, Score { is_correct: true, score: 60.0 });
    }

    #[test]
    fn test_no_overlap() {
        let key = json!({"expected_ratings": {"a": 4}});
        assert!(matches!(
            criteria_evaluation(&key, &json!({"ratings": {"b": 4}})),
            Err(ValidationError::NoOverlap)
        ));
    }
}
