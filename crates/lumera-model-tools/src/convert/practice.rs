use crate::convert::{IntoModel, TryFromDbModel, TryIntoModel};
use crate::document::{parse, parse_value};
use crate::error::Error;
use lumera_entity::practice::answer::Model as AnswerModel;
use lumera_entity::practice::session::Model as SessionModel;
use lumera_model::bloom::BloomLevel;
use lumera_model::practice::{PracticeAnswer, PracticeSession, PracticeSummary};
use lumera_model::strategy::PracticeStrategy;

impl TryFromDbModel<&SessionModel> for PracticeStrategy {
    type Error = Error;

    fn try_from_db_model(model: &SessionModel) -> Result<Self, Self::Error> {
        parse(&model.strategy)
    }
}

impl TryFromDbModel<SessionModel> for PracticeSession {
    type Error = Error;

    fn try_from_db_model(model: SessionModel) -> Result<Self, Self::Error> {
        let strategy: PracticeStrategy = (&model).try_into_model()?;
        let summary = model
            .summary
            .as_deref()
            .map(parse::<PracticeSummary>)
            .transpose()?;
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            objective_id: model.objective_id,
            objective_level_id: model.objective_level_id,
            status: model.status.into_model(),
            initial_level: BloomLevel::try_from(model.initial_level)?,
            current_level: strategy.current_level,
            final_level: model.final_level.map(BloomLevel::try_from).transpose()?,
            target_questions: model.target_questions,
            answered: model.answered,
            correct: model.correct,
            started_at: model.started_at,
            completed_at: model.completed_at,
            summary,
        })
    }
}

impl TryFromDbModel<AnswerModel> for PracticeAnswer {
    type Error = Error;

    fn try_from_db_model(model: AnswerModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            question_id: model.question_id,
            bloom_level: BloomLevel::try_from(model.bloom_level)?,
            answer: parse_value(&model.answer)?,
            is_correct: model.is_correct,
            score: model.score,
            response_time_secs: model.response_time_secs,
            created_at: model.created_at,
        })
    }
}
