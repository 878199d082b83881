use super::ValidationError;
use lumera_model::question::QuestionKind;
use serde_json::Value;
use std::str::FromStr;

struct Requirements {
    question: &'static [&'static str],
    key: &'static [&'static str],
}

fn requirements(kind: QuestionKind) -> Requirements {
    let (question, key): (&'static [&'static str], &'static [&'static str]) = match kind {
        QuestionKind::MultipleChoice => (&["pregunta", "opciones"], &["respuesta_correcta"]),
        QuestionKind::TrueFalse => (&["statement"], &["correct_answer"]),
        QuestionKind::FillBlanks => (&["text"], &["blanks"]),
        QuestionKind::DragDropMatching => (&["pairs"], &[]),
        QuestionKind::Sequencing => (&["items"], &["correct_order"]),
        QuestionKind::CompareContrast => (&["characteristics"], &["correct_columns"]),
        QuestionKind::OpenEnded => (&["prompt"], &["rubric"]),
        QuestionKind::CriteriaEvaluation => (&["criteria"], &["expected_ratings"]),
        QuestionKind::ConceptMap => (&["required_concepts"], &["suggested_connections"]),
    };
    Requirements { question, key }
}

/// Checks that a question payload and its key carry the fields its kind requires.
pub fn check_structure(kind: &str, question_data: &Value, validation_data: &Value) -> Result<(), ValidationError> {
    let parsed = QuestionKind::from_str(kind).map_err(|_| ValidationError::UnknownType(kind.to_owned()))?;
    let kind: &'static str = parsed.into();
    let requirements = requirements(parsed);

    let question = question_data
        .as_object()
        .ok_or(ValidationError::NotAnObject("question_data"))?;
    let key = validation_data
        .as_object()
        .ok_or(ValidationError::NotAnObject("validation_data"))?;

    if let Some(field) = requirements.question.iter().copied().find(|field| !question.contains_key(*field)) {
        return Err(ValidationError::MissingStructure {
            kind,
            payload: "question_data",
            field,
        });
    }
    if let Some(field) = requirements.key.iter().copied().find(|field| !key.contains_key(*field)) {
        return Err(ValidationError::MissingStructure {
            kind,
            payload: "validation_data",
            field,
        });
    }
    Ok(())
}
