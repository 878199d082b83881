use crate::convert::{FromDbModel, FromModel, IntoModel, TryFromDbModel};
use crate::document::{parse_tags, parse_value};
use crate::error::Error;
use lumera_entity::question::Model as QuestionModel;
use lumera_entity::question::Usage;
use lumera_model::question::{PublicQuestion, Question, QuestionUsage};

impl FromDbModel<Usage> for QuestionUsage {
    fn from_db_model(model: Usage) -> Self {
        match model {
            Usage::Diagnostic => Self::Diagnostic,
            Usage::Practice => Self::Practice,
            Usage::All => Self::All,
        }
    }
}

impl FromModel<QuestionUsage> for Usage {
    fn from_model(model: QuestionUsage) -> Self {
        match model {
            QuestionUsage::Diagnostic => Self::Diagnostic,
            QuestionUsage::Practice => Self::Practice,
            QuestionUsage::All => Self::All,
        }
    }
}

impl TryFromDbModel<QuestionModel> for Question {
    type Error = Error;

    fn try_from_db_model(model: QuestionModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            objective_level_id: model.objective_level_id,
            question_data: parse_value(&model.question_data)?,
            validation_data: parse_value(&model.validation_data)?,
            tags: parse_tags(&model.tags)?,
            kind: model.kind,
            usage: model.usage.into_model(),
            difficulty: model.difficulty,
            active: model.active,
            times_used: model.times_used,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Leaves the validation key unparsed and out of the result.
impl TryFromDbModel<QuestionModel> for PublicQuestion {
    type Error = Error;

    fn try_from_db_model(model: QuestionModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            objective_level_id: model.objective_level_id,
            question_data: parse_value(&model.question_data)?,
            tags: parse_tags(&model.tags)?,
            kind: model.kind,
            usage: model.usage.into_model(),
            difficulty: model.difficulty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::TryIntoModel;
    use serde_json::json;

    fn model() -> QuestionModel {
        let now = chrono::Utc::now().naive_utc();
        QuestionModel {
            id: 3,
            objective_level_id: 8,
            kind: "multiple_choice".to_owned(),
            usage: Usage::Diagnostic,
            question_data: r#"{"pregunta":"2+2?","opciones":["3","4"]}"#.to_owned(),
            validation_data: r#"{"respuesta_correcta":"B"}"#.to_owned(),
            difficulty: 2,
            active: true,
            tags: r#"["math"]"#.to_owned(),
            times_used: 4,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_public_question_hides_key() {
        let question: PublicQuestion = model().try_into_model().unwrap();
        assert_eq!(question.usage, QuestionUsage::Diagnostic);
        assert_eq!(question.question_data["pregunta"], "2+2?");
        let json = serde_json::to_value(&question).unwrap();
        assert!(json.get("validation_data").is_none());
        assert_eq!(json["tags"], json!(["math"]));
    }

    #[test]
    fn test_full_question() {
        let question: Question = model().try_into_model().unwrap();
        assert_eq!(question.validation_data, json!({"respuesta_correcta": "B"}));
        assert_eq!(question.times_used, 4);
    }

    #[test]
    fn test_broken_payload() {
        let mut broken = model();
        broken.question_data = "{".to_owned();
        assert!(matches!(
            TryIntoModel::<PublicQuestion>::try_into_model(broken),
            Err(Error::Serialization(_))
        ));
    }
}
