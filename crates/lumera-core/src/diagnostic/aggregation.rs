use lumera_entity::diagnostic::answer::Model as AnswerModel;
use lumera_model::bloom::BloomLevel;
use std::collections::BTreeMap;

/// Per objective outcome of a finished diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectiveOutcome {
    pub objective_id: i32,
    pub answered: i32,
    pub correct: i32,
    pub mastered_level: Option<BloomLevel>,
    /// Level record progress is projected onto: the highest correct answer, else the first answer.
    pub objective_level_id: i32,
}

impl ObjectiveOutcome {
    /// Truncated integer percentage.
    #[must_use]
    pub fn accuracy_percent(&self) -> i32 {
        if self.answered == 0 {
            return 0;
        }
        self.correct * 100 / self.answered
    }

    #[must_use]
    pub fn recommendation(&self) -> String {
        let accuracy = self.accuracy_percent();
        let advice = if accuracy >= 80 {
            " ¡Excelente dominio de este objetivo!"
        } else if accuracy >= 60 {
            " Buen nivel, con práctica adicional alcanzarás la maestría."
        } else {
            " Te recomendamos reforzar este contenido con ejercicios adicionales."
        };
        format!(
            "Completaste {} de {} preguntas correctamente.{advice}",
            self.correct, self.answered
        )
    }
}

/// Groups answers by objective, ordered by objective id. Answers are expected in submission order.
pub fn aggregate(answers: &[AnswerModel]) -> Vec<ObjectiveOutcome> {
    let mut outcomes: BTreeMap<i32, ObjectiveOutcome> = BTreeMap::new();
    for answer in answers {
        let outcome = outcomes.entry(answer.objective_id).or_insert_with(|| ObjectiveOutcome {
            objective_id: answer.objective_id,
            answered: 0,
            correct: 0,
            mastered_level: None,
            objective_level_id: answer.objective_level_id,
        });
        outcome.answered += 1;
        if answer.is_correct != Some(true) {
            continue;
        }
        outcome.correct += 1;
        let Ok(level) = BloomLevel::try_from(answer.bloom_level) else {
            tracing::warn!(answer_id = %answer.id, bloom_level = answer.bloom_level, "answer has invalid bloom level");
            continue;
        };
        if outcome.mastered_level.is_none_or(|mastered| level > mastered) {
            outcome.mastered_level = Some(level);
            outcome.objective_level_id = answer.objective_level_id;
        }
    }
    outcomes.into_values().collect()
}

/// Mean mastered level over objectives with at least one correct answer.
#[must_use]
pub fn average_level(outcomes: &[ObjectiveOutcome]) -> Option<f64> {
    let levels: Vec<f64> = outcomes
        .iter()
        .filter_map(|outcome| outcome.mastered_level)
        .map(|level| f64::from(level.number()))
        .collect();
    if levels.is_empty() {
        return None;
    }
    let count = u32::try_from(levels.len()).unwrap_or(u32::MAX);
    Some(levels.iter().sum::<f64>() / f64::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn answer(objective_id: i32, objective_level_id: i32, bloom_level: i16, is_correct: Option<bool>) -> AnswerModel {
        AnswerModel {
            id: Uuid::new_v4(),
            session_id: Uuid::nil(),
            question_id: 1,
            objective_level_id,
            objective_id,
            bloom_level,
            answer: "{}".to_owned(),
            is_correct,
            score: is_correct.map(|correct| if correct { 100.0 } else { 0.0 }),
            response_time_secs: None,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn test_two_objectives() {
        let answers = vec![
            answer(1, 13, 3, Some(true)),
            answer(2, 22, 2, Some(false)),
            answer(1, 14, 4, Some(true)),
        ];
        let outcomes = aggregate(&answers);
        assert_eq!(outcomes.len(), 2);

        let first = &outcomes[0];
        assert_eq!(first.mastered_level, Some(BloomLevel::Analyze));
        assert_eq!(first.accuracy_percent(), 100);
        assert_eq!(first.objective_level_id, 14);
        assert!(first.recommendation().ends_with("¡Excelente dominio de este objetivo!"));

        let second = &outcomes[1];
        assert_eq!(second.mastered_level, None);
        assert_eq!(second.accuracy_percent(), 0);
        assert_eq!(second.objective_level_id, 22);
        assert_eq!(
            second.recommendation(),
            "Completaste 0 de 1 preguntas correctamente. Te recomendamos reforzar este contenido con ejercicios adicionales."
        );

        assert_eq!(average_level(&outcomes), Some(4.0));
    }

    #[test]
    fn test_lower_correct_answer_keeps_maximum() {
        let answers = vec![
            answer(1, 15, 5, Some(true)),
            answer(1, 12, 2, Some(true)),
            answer(1, 11, 1, None),
        ];
        let outcomes = aggregate(&answers);
        assert_eq!(outcomes[0].mastered_level, Some(BloomLevel::Evaluate));
        assert_eq!(outcomes[0].objective_level_id, 15);
        // pending review counts as answered but not correct
        assert_eq!(outcomes[0].accuracy_percent(), 66);
        assert!(outcomes[0].recommendation().ends_with("alcanzarás la maestría."));
    }

    #[test]
    fn test_average_over_mastered_objectives() {
        let answers = vec![
            answer(1, 12, 2, Some(true)),
            answer(2, 25, 5, Some(true)),
            answer(3, 31, 1, Some(false)),
        ];
        assert_eq!(average_level(&aggregate(&answers)), Some(3.5));
        assert_eq!(average_level(&[]), None);
    }
}
