//! Question bank access: reading, authoring with the structural check, and standalone answer
//! validation.

use crate::error::AssessmentError;
use crate::validation::{self, ValidationError, check_structure};
use lumera_db::question::{Mutation as QuestionMutation, Query as QuestionQuery, QuestionFilter, QuestionRecord};
use lumera_db::objective_level;
use lumera_model::question::{
    PublicQuestion, Question, QuestionInput, QuestionKind, QuestionListQuery, QuestionTypeInfo, ValidateAnswerResponse,
};
use lumera_model_tools::convert::{IntoDbModel, TryIntoModel};
use lumera_model_tools::document::{parse_value, render};
use sea_orm::ConnectionTrait;
use serde_json::Value;
use strum::IntoEnumIterator;

const MANUAL_REVIEW_EXPLANATION: &str = "This question requires manual or AI validation";

pub async fn get<C: ConnectionTrait>(conn: &C, question_id: i32) -> Result<PublicQuestion, AssessmentError> {
    let question = QuestionQuery::find(conn, question_id).await?;
    Ok(question.try_into_model()?)
}

pub async fn list<C: ConnectionTrait>(
    conn: &C,
    query: QuestionListQuery,
) -> Result<Vec<PublicQuestion>, AssessmentError> {
    let filter = QuestionFilter {
        kind: query.kind.map(|kind| kind.to_string()),
        usage: query.usage.map(IntoDbModel::into_db_model),
        objective_level_id: query.objective_level_id,
    };
    let questions = QuestionQuery::list(conn, filter).await?;
    Ok(questions
        .into_iter()
        .map(TryIntoModel::<PublicQuestion>::try_into_model)
        .collect::<Result<_, _>>()?)
}

pub async fn create<C: ConnectionTrait>(conn: &C, input: QuestionInput) -> Result<Question, AssessmentError> {
    let record = record(conn, input).await?;
    let question = QuestionMutation::create(conn, record).await?;
    tracing::info!(question_id = question.id, kind = %question.kind, "created question");
    Ok(question.try_into_model()?)
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    question_id: i32,
    input: QuestionInput,
) -> Result<Question, AssessmentError> {
    let record = record(conn, input).await?;
    let question = QuestionMutation::update(conn, question_id, record).await?;
    tracing::info!(question_id, "updated question");
    Ok(question.try_into_model()?)
}

async fn record<C: ConnectionTrait>(conn: &C, input: QuestionInput) -> Result<QuestionRecord, AssessmentError> {
    check_structure(input.kind.as_ref(), &input.question_data, &input.validation_data)?;
    if !(1..=5).contains(&input.difficulty) {
        return Err(AssessmentError::InvalidInput(format!(
            "difficulty {} is outside 1..=5",
            input.difficulty
        )));
    }
    objective_level::Query::find(conn, input.objective_level_id).await?;
    Ok(QuestionRecord {
        objective_level_id: input.objective_level_id,
        kind: input.kind.to_string(),
        usage: input.usage.into_db_model(),
        question_data: render(&input.question_data)?,
        validation_data: render(&input.validation_data)?,
        difficulty: input.difficulty,
        active: input.active,
        tags: render(&input.tags)?,
    })
}

#[must_use]
pub fn types() -> Vec<QuestionTypeInfo> {
    QuestionKind::iter()
        .map(|kind| QuestionTypeInfo {
            kind,
            display_name: kind.display_name().to_owned(),
            auto_scored: !kind.requires_review(),
        })
        .collect()
}

/// Scores an answer outside of any session and counts the use of the question.
///
/// Kinds that need manual review get a zero score with an explanation instead of an error, and are
/// not counted.
pub async fn validate<C: ConnectionTrait>(
    conn: &C,
    question_id: i32,
    answer: &Value,
) -> Result<ValidateAnswerResponse, AssessmentError> {
    let question = QuestionQuery::find(conn, question_id).await?;
    let key = parse_value(&question.validation_data)?;

    let score = match validation::validate_answer(&question.kind, &key, answer) {
        Ok(score) => score,
        Err(ValidationError::ManualReviewRequired) => {
            return Ok(ValidateAnswerResponse {
                is_correct: false,
                score: 0.0,
                explanation: Some(MANUAL_REVIEW_EXPLANATION.to_owned()),
                correct_answer: None,
            });
        }
        Err(error) => return Err(error.into()),
    };
    QuestionMutation::increment_usage(conn, question_id).await?;

    let question_data = parse_value(&question.question_data)?;
    Ok(ValidateAnswerResponse {
        is_correct: score.is_correct,
        score: score.score,
        explanation: question_data
            .get("explicacion")
            .and_then(Value::as_str)
            .map(str::to_owned),
        correct_answer: if score.is_correct {
            None
        } else {
            key.get("respuesta_correcta").cloned()
        },
    })
}
