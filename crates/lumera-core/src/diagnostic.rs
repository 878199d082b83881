//! Diagnostic sessions: a survey of one subject that probes up to a fixed number of objectives,
//! moving one Bloom level up or down after every answer.

pub mod aggregation;

use crate::error::{AssessmentError, applied};
use crate::progress::{ProgressProjector, ProgressUpdate};
use crate::rewards::{Rewards, UnlockEvent};
use crate::selection::{distinct_objectives, nearest_level, pick};
use crate::validation::{self, ValidationError};
use aggregation::{ObjectiveOutcome, aggregate, average_level};
use lumera_config::{EngineConfig, RewardConfig};
use lumera_db::diagnostic::answer::{Mutation as AnswerMutation, NewDiagnosticAnswer, Query as AnswerQuery};
use lumera_db::diagnostic::result::{Mutation as ResultMutation, NewDiagnosticResult, Query as ResultQuery};
use lumera_db::diagnostic::session::{Mutation as SessionMutation, Query as SessionQuery};
use lumera_db::util::FlattenTransactionResultExt;
use lumera_db::{objective_level, question, subject};
use lumera_entity::SessionStatus;
use lumera_entity::question::Usage;
use lumera_model::bloom::BloomLevel;
use lumera_model::diagnostic::{
    DiagnosticAnswer, DiagnosticCompletion, DiagnosticResult, DiagnosticSession, DiagnosticSessionDetail,
    DiagnosticSubmitResult,
};
use lumera_model::progress::ProgressEventKind;
use lumera_model::question::{NextQuestion, PublicQuestion, SubmitAnswerRequest};
use lumera_model::strategy::DiagnosticStrategy;
use lumera_model_tools::convert::TryIntoModel;
use lumera_model_tools::document::{parse_value, render};
use sea_orm::{ConnectionTrait, DatabaseTransaction, TransactionTrait};
use serde_json::json;
use std::error::Error;
use uuid::Uuid;

#[derive(Clone)]
pub struct DiagnosticEngine {
    initial_level: BloomLevel,
    objective_count: usize,
    amounts: RewardConfig,
    rewards: Rewards,
}

impl DiagnosticEngine {
    #[must_use]
    pub fn new(config: &EngineConfig, rewards: Rewards) -> Self {
        Self {
            initial_level: BloomLevel::clamped(i64::from(config.diagnostic.initial_level)),
            objective_count: usize::try_from(config.diagnostic.objective_count).unwrap_or(usize::MAX),
            amounts: config.rewards.clone(),
            rewards,
        }
    }

    pub async fn start<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: Uuid,
        subject_id: i32,
    ) -> Result<DiagnosticSession, AssessmentError> {
        subject::Query::find(conn, subject_id).await?;
        let previous = SessionQuery::count_attempts(conn, user_id, subject_id).await?;
        let attempt = i32::try_from(previous).unwrap_or(i32::MAX - 1) + 1;
        let strategy = render(&DiagnosticStrategy::new(self.initial_level))?;

        let session = SessionMutation::create(conn, user_id, subject_id, attempt, strategy).await?;
        tracing::info!(session_id = %session.id, %user_id, subject_id, attempt, "started diagnostic");
        Ok(session.try_into_model()?)
    }

    pub async fn list<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: Uuid,
    ) -> Result<Vec<DiagnosticSession>, AssessmentError> {
        let sessions = SessionQuery::load_sessions(conn, user_id).await?;
        Ok(sessions
            .into_iter()
            .map(TryIntoModel::<DiagnosticSession>::try_into_model)
            .collect::<Result<_, _>>()?)
    }

    /// The session with every answer given so far.
    pub async fn progress<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<DiagnosticSessionDetail, AssessmentError> {
        let session = SessionQuery::load_session(conn, user_id, session_id).await?;
        let answers = AnswerQuery::load_for_session(conn, session_id).await?;
        Ok(DiagnosticSessionDetail {
            session: session.try_into_model()?,
            answers: answers
                .into_iter()
                .map(TryIntoModel::<DiagnosticAnswer>::try_into_model)
                .collect::<Result<_, _>>()?,
        })
    }

    /// Picks a question for the next objective not yet probed.
    ///
    /// `NotFound` once every objective was asked about means the diagnostic is exhausted and should
    /// be completed.
    pub async fn next_question<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<NextQuestion, AssessmentError> {
        let session = SessionQuery::load_session(conn, user_id, session_id).await?;
        if session.status == SessionStatus::Completed {
            return Err(AssessmentError::AlreadyCompleted);
        }
        let mut strategy: DiagnosticStrategy = (&session).try_into_model()?;

        if strategy.objectives.is_none() {
            let levels = objective_level::Query::list_for_subject(conn, session.subject_id).await?;
            let objectives = distinct_objectives(&levels, self.objective_count);
            if objectives.is_empty() {
                return Err(AssessmentError::NotFound(format!(
                    "subject {} has no learning objectives",
                    session.subject_id
                )));
            }
            strategy.fix_objectives(objectives);
        }
        let objective_id = strategy
            .next_objective()
            .ok_or_else(|| AssessmentError::NotFound("diagnostic has no more questions".to_owned()))?;

        let levels = objective_level::Query::list_for_objective(conn, objective_id).await?;
        let level = nearest_level(levels, strategy.current_level)
            .ok_or_else(|| AssessmentError::NotFound(format!("objective {objective_id} has no bloom levels")))?;
        let candidates = question::Query::candidates_for_objective_level(conn, level.id, Usage::Diagnostic).await?;
        let question = pick(&candidates).ok_or_else(|| {
            AssessmentError::NotFound(format!("no diagnostic question for objective level {}", level.id))
        })?;

        strategy.mark_evaluated(objective_id);
        let stored = SessionMutation::record_strategy(conn, session_id, session.version, render(&strategy)?).await?;
        applied(stored)?;

        tracing::debug!(%session_id, objective_id, question_id = question.id, "selected diagnostic question");
        Ok(NextQuestion {
            question: TryIntoModel::<PublicQuestion>::try_into_model(question)?,
            question_number: session.total_questions + 1,
            total_questions: i32::try_from(strategy.objective_count()).unwrap_or(i32::MAX),
            current_bloom_level: strategy.current_level,
        })
    }

    /// Scores and stores an answer. Answers needing manual review are stored unscored and count as
    /// not correct for the level adaptation.
    pub async fn submit<C: ConnectionTrait + TransactionTrait>(
        &self,
        conn: &C,
        user_id: Uuid,
        session_id: Uuid,
        request: SubmitAnswerRequest,
    ) -> Result<DiagnosticSubmitResult, AssessmentError> {
        conn.transaction::<_, _, AssessmentError>(move |txn| {
            Box::pin(async move { submit_in(txn, user_id, session_id, request).await })
        })
        .await
        .flatten_res()
    }

    /// Finishes the session, materializes one result per objective and projects progress.
    ///
    /// Rewards are handed to a background task afterwards. Their failures are logged, never
    /// returned.
    pub async fn complete<C: ConnectionTrait + TransactionTrait>(
        &self,
        conn: &C,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<DiagnosticCompletion, AssessmentError> {
        let (session, outcomes, results) = conn
            .transaction::<_, _, AssessmentError>(move |txn| {
                Box::pin(async move { complete_in(txn, user_id, session_id).await })
            })
            .await
            .flatten_res()?;

        tracing::info!(%session_id, %user_id, objectives = outcomes.len(), "completed diagnostic");
        self.spawn_rewards(&session);

        Ok(DiagnosticCompletion {
            average_bloom_level: average_level(&outcomes),
            session,
            results,
        })
    }

    pub async fn results<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<Vec<DiagnosticResult>, AssessmentError> {
        SessionQuery::load_session(conn, user_id, session_id).await?;
        let results = ResultQuery::load_for_session(conn, session_id).await?;
        Ok(results
            .into_iter()
            .map(TryIntoModel::<DiagnosticResult>::try_into_model)
            .collect::<Result<_, _>>()?)
    }

    fn spawn_rewards(&self, session: &DiagnosticSession) {
        let rewards = self.rewards.clone();
        let amounts = self.amounts.clone();
        let session = session.clone();
        tokio::spawn(async move { award(rewards, amounts, session).await });
    }
}

async fn submit_in(
    txn: &DatabaseTransaction,
    user_id: Uuid,
    session_id: Uuid,
    request: SubmitAnswerRequest,
) -> Result<DiagnosticSubmitResult, AssessmentError> {
    let session = SessionQuery::load_session(txn, user_id, session_id).await?;
    if session.status == SessionStatus::Completed {
        return Err(AssessmentError::AlreadyCompleted);
    }
    let mut strategy: DiagnosticStrategy = (&session).try_into_model()?;
    let question = question::Query::find(txn, request.question_id).await?;
    let level = objective_level::Query::find(txn, question.objective_level_id).await?;

    let key = parse_value(&question.validation_data)?;
    let score = match validation::validate_answer(&question.kind, &key, &request.answer) {
        Ok(score) => Some(score),
        Err(ValidationError::ManualReviewRequired) => None,
        Err(error) => return Err(error.into()),
    };
    if score.is_some() {
        question::Mutation::increment_usage(txn, question.id).await?;
    }

    let answer = AnswerMutation::create(
        txn,
        NewDiagnosticAnswer {
            session_id,
            question_id: question.id,
            objective_level_id: level.id,
            objective_id: level.objective_id,
            bloom_level: level.bloom_level,
            answer: render(&request.answer)?,
            is_correct: score.map(|score| score.is_correct),
            score: score.map(|score| score.score),
            response_time_secs: request.response_time_secs,
        },
    )
    .await?;

    let correct = score.is_some_and(|score| score.is_correct);
    let new_level = strategy.record(correct);
    let stored = SessionMutation::record_answer(
        txn,
        session_id,
        session.version,
        render(&strategy)?,
        session.total_questions + 1,
        session.correct_answers + i32::from(correct),
    )
    .await?;
    applied(stored)?;

    Ok(DiagnosticSubmitResult {
        answer_id: answer.id,
        is_correct: answer.is_correct,
        score: answer.score,
        new_bloom_level: new_level,
        requires_review: score.is_none(),
    })
}

async fn complete_in(
    txn: &DatabaseTransaction,
    user_id: Uuid,
    session_id: Uuid,
) -> Result<(DiagnosticSession, Vec<ObjectiveOutcome>, Vec<DiagnosticResult>), AssessmentError> {
    let session = SessionQuery::load_session(txn, user_id, session_id).await?;
    if session.status == SessionStatus::Completed {
        return Err(AssessmentError::AlreadyCompleted);
    }
    let answers = AnswerQuery::load_for_session(txn, session_id).await?;
    let outcomes = aggregate(&answers);

    applied(SessionMutation::complete(txn, session_id, session.version).await?)?;

    let rows = outcomes
        .iter()
        .map(|outcome| NewDiagnosticResult {
            objective_id: outcome.objective_id,
            mastered_level: outcome.mastered_level.map(i16::from),
            mastered_level_name: outcome.mastered_level.map(|level| level.name().to_owned()),
            answered: outcome.answered,
            correct: outcome.correct,
            accuracy_percent: outcome.accuracy_percent(),
            recommendation: outcome.recommendation(),
        })
        .collect();
    let results = ResultMutation::create_many(txn, session_id, rows).await?;

    for outcome in &outcomes {
        let achieved_level = match outcome.mastered_level {
            Some(level) => level,
            None => BloomLevel::try_from(objective_level::Query::find(txn, outcome.objective_level_id).await?.bloom_level)
                .unwrap_or(BloomLevel::LOWEST),
        };
        ProgressProjector::project(
            txn,
            ProgressUpdate {
                user_id,
                objective_level_id: outcome.objective_level_id,
                achieved_level,
                accuracy_percent: f64::from(outcome.accuracy_percent()),
                correct: outcome.correct,
                total: outcome.answered,
                event: ProgressEventKind::Diagnostic,
            },
        )
        .await?;
    }

    let session = SessionQuery::load_session(txn, user_id, session_id).await?;
    let results = results
        .into_iter()
        .map(TryIntoModel::<DiagnosticResult>::try_into_model)
        .collect::<Result<Vec<_>, _>>()?;
    Ok((session.try_into_model()?, outcomes, results))
}

/// Best effort, at most once. Runs detached from the request.
async fn award(rewards: Rewards, amounts: RewardConfig, session: DiagnosticSession) {
    let session_id = session.id;
    let user_id = session.user_id;

    if let Err(error) = rewards
        .gamification
        .add_xp(user_id, amounts.diagnostic_xp, "diagnostic_completed")
        .await
    {
        tracing::error!(error = &error as &dyn Error, %session_id, %user_id, "failed to award diagnostic xp");
    }
    if session.total_questions == 0 {
        return;
    }

    let score = session.correct_answers * 100 / session.total_questions;
    let coins = if score >= 80 {
        Some((amounts.diagnostic_excellent_coins, "diagnostic_excellent"))
    } else if score >= 60 {
        Some((amounts.diagnostic_good_coins, "diagnostic_good"))
    } else {
        None
    };
    if let Some((amount, reason)) = coins {
        if let Err(error) = rewards.gamification.add_coins(user_id, amount, reason).await {
            tracing::error!(error = &error as &dyn Error, %session_id, %user_id, "failed to award diagnostic coins");
        }
    }

    let event = UnlockEvent {
        kind: "diagnostic_achievement".to_owned(),
        key: format!("diagnostic_subject_{}_score_{score}", session.subject_id),
        data: json!({"subject_id": session.subject_id, "score": score}),
    };
    if let Err(error) = rewards.unlocks.check_and_unlock(user_id, event).await {
        tracing::error!(error = &error as &dyn Error, %session_id, %user_id, "failed to check diagnostic unlocks");
    }
}
