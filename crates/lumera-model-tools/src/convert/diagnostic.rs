use crate::convert::{IntoModel, TryFromDbModel, TryIntoModel};
use crate::document::{parse, parse_value};
use crate::error::Error;
use lumera_entity::diagnostic::answer::Model as AnswerModel;
use lumera_entity::diagnostic::result::Model as ResultModel;
use lumera_entity::diagnostic::session::Model as SessionModel;
use lumera_model::bloom::BloomLevel;
use lumera_model::diagnostic::{DiagnosticAnswer, DiagnosticResult, DiagnosticSession};
use lumera_model::strategy::DiagnosticStrategy;

impl TryFromDbModel<&SessionModel> for DiagnosticStrategy {
    type Error = Error;

    fn try_from_db_model(model: &SessionModel) -> Result<Self, Self::Error> {
        parse(&model.strategy)
    }
}

impl TryFromDbModel<SessionModel> for DiagnosticSession {
    type Error = Error;

    fn try_from_db_model(model: SessionModel) -> Result<Self, Self::Error> {
        let strategy: DiagnosticStrategy = (&model).try_into_model()?;
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            subject_id: model.subject_id,
            attempt: model.attempt,
            status: model.status.into_model(),
            current_bloom_level: strategy.current_level,
            total_questions: model.total_questions,
            correct_answers: model.correct_answers,
            started_at: model.started_at,
            completed_at: model.completed_at,
        })
    }
}

impl TryFromDbModel<AnswerModel> for DiagnosticAnswer {
    type Error = Error;

    fn try_from_db_model(model: AnswerModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            question_id: model.question_id,
            objective_level_id: model.objective_level_id,
            objective_id: model.objective_id,
            bloom_level: BloomLevel::try_from(model.bloom_level)?,
            answer: parse_value(&model.answer)?,
            is_correct: model.is_correct,
            score: model.score,
            response_time_secs: model.response_time_secs,
            created_at: model.created_at,
        })
    }
}

impl TryFromDbModel<ResultModel> for DiagnosticResult {
    type Error = Error;

    fn try_from_db_model(model: ResultModel) -> Result<Self, Self::Error> {
        Ok(Self {
            objective_id: model.objective_id,
            mastered_level: model.mastered_level.map(BloomLevel::try_from).transpose()?,
            mastered_level_name: model.mastered_level_name,
            answered: model.answered,
            correct: model.correct,
            accuracy_percent: model.accuracy_percent,
            recommendation: model.recommendation,
        })
    }
}
