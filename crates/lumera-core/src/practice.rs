//! Practice sessions: a drill on one objective that moves one Bloom level after a streak of equal
//! outcomes and ends with an accuracy weighted final level.

pub mod final_level;

use crate::error::{AssessmentError, applied};
use crate::progress::{ProgressProjector, ProgressUpdate};
use crate::rewards::Rewards;
use crate::selection::pick;
use crate::validation;
use lumera_config::{EngineConfig, RewardConfig};
use lumera_db::practice::answer::{Mutation as AnswerMutation, NewPracticeAnswer, Query as AnswerQuery};
use lumera_db::practice::session::{Mutation as SessionMutation, NewPracticeSession, Query as SessionQuery};
use lumera_db::util::FlattenTransactionResultExt;
use lumera_db::{objective_level, question};
use lumera_entity::SessionStatus;
use lumera_entity::practice::session::Model as SessionModel;
use lumera_entity::question::Usage;
use lumera_model::bloom::BloomLevel;
use lumera_model::practice::{
    PracticeAnswer, PracticeCompletion, PracticeListQuery, PracticeSession, PracticeSessionDetail,
    PracticeSubmitResult, PracticeSummary, RewardGrant, StartPracticeRequest,
};
use lumera_model::progress::ProgressEventKind;
use lumera_model::question::{NextQuestion, PublicQuestion, SubmitAnswerRequest};
use lumera_model::strategy::PracticeStrategy;
use lumera_model_tools::convert::{IntoDbModel, TryIntoModel};
use lumera_model_tools::document::{parse_value, render};
use num_traits::ToPrimitive;
use sea_orm::{ConnectionTrait, DatabaseTransaction, TransactionTrait};
use std::error::Error;
use uuid::Uuid;

#[derive(Clone)]
pub struct PracticeEngine {
    default_target: i32,
    streak_threshold: u32,
    amounts: RewardConfig,
    rewards: Rewards,
}

impl PracticeEngine {
    #[must_use]
    pub fn new(config: &EngineConfig, rewards: Rewards) -> Self {
        Self {
            default_target: config.practice.default_target,
            streak_threshold: config.practice.streak_threshold,
            amounts: config.rewards.clone(),
            rewards,
        }
    }

    pub async fn start<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: Uuid,
        request: StartPracticeRequest,
    ) -> Result<PracticeSession, AssessmentError> {
        let target = request.question_count.unwrap_or(self.default_target);
        if target <= 0 {
            return Err(AssessmentError::InvalidInput("question_count must be positive".to_owned()));
        }
        let level = objective_level::Query::find(conn, request.objective_level_id).await?;
        if level.objective_id != request.objective_id {
            return Err(AssessmentError::InvalidInput(format!(
                "objective level {} does not belong to objective {}",
                level.id, request.objective_id
            )));
        }
        let initial = BloomLevel::try_from(level.bloom_level)
            .map_err(|error| AssessmentError::InvalidInput(error.to_string()))?;

        let session = SessionMutation::create(
            conn,
            NewPracticeSession {
                user_id,
                objective_id: request.objective_id,
                objective_level_id: level.id,
                initial_level: initial.into(),
                target_questions: target,
                strategy: render(&PracticeStrategy::new(initial))?,
            },
        )
        .await?;
        tracing::info!(session_id = %session.id, %user_id, objective_level_id = level.id, target, "started practice");
        Ok(session.try_into_model()?)
    }

    pub async fn list<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: Uuid,
        query: PracticeListQuery,
    ) -> Result<Vec<PracticeSession>, AssessmentError> {
        let sessions = SessionQuery::load_sessions(
            conn,
            user_id,
            query.objective_id,
            query.status.map(IntoDbModel::into_db_model),
        )
        .await?;
        Ok(sessions
            .into_iter()
            .map(TryIntoModel::<PracticeSession>::try_into_model)
            .collect::<Result<_, _>>()?)
    }

    pub async fn get<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<PracticeSessionDetail, AssessmentError> {
        let session = SessionQuery::load_session(conn, user_id, session_id).await?;
        let answers = AnswerQuery::load_for_session(conn, session_id).await?;
        Ok(PracticeSessionDetail {
            session: session.try_into_model()?,
            answers: answers
                .into_iter()
                .map(TryIntoModel::<PracticeAnswer>::try_into_model)
                .collect::<Result<_, _>>()?,
        })
    }

    /// A question at the current level, or one level off when none is available there.
    pub async fn next_question<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<NextQuestion, AssessmentError> {
        let session = SessionQuery::load_session(conn, user_id, session_id).await?;
        ensure_open(&session)?;
        let strategy: PracticeStrategy = (&session).try_into_model()?;
        let current = strategy.current_level;

        let mut candidates =
            question::Query::candidates_for_objective(conn, session.objective_id, vec![current.into()], Usage::Practice)
                .await?;
        if candidates.is_empty() {
            let nearby = vec![current.lower().into(), current.into(), current.raise().into()];
            candidates =
                question::Query::candidates_for_objective(conn, session.objective_id, nearby, Usage::Practice).await?;
        }
        let question = pick(&candidates).ok_or_else(|| {
            AssessmentError::NotFound(format!(
                "no practice question near level {} for objective {}",
                current.number(),
                session.objective_id
            ))
        })?;

        tracing::debug!(%session_id, question_id = question.id, "selected practice question");
        Ok(NextQuestion {
            question: TryIntoModel::<PublicQuestion>::try_into_model(question)?,
            question_number: session.answered + 1,
            total_questions: session.target_questions,
            current_bloom_level: current,
        })
    }

    /// Scores and stores an answer. Kinds needing manual review are rejected.
    pub async fn submit<C: ConnectionTrait + TransactionTrait>(
        &self,
        conn: &C,
        user_id: Uuid,
        session_id: Uuid,
        request: SubmitAnswerRequest,
    ) -> Result<PracticeSubmitResult, AssessmentError> {
        let threshold = self.streak_threshold;
        conn.transaction::<_, _, AssessmentError>(move |txn| {
            Box::pin(async move { submit_in(txn, user_id, session_id, request, threshold).await })
        })
        .await
        .flatten_res()
    }

    /// Freezes the final level and summary, then projects progress. A projection failure fails the
    /// completion. Reward failures afterwards are only logged.
    pub async fn complete<C: ConnectionTrait + TransactionTrait>(
        &self,
        conn: &C,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<PracticeCompletion, AssessmentError> {
        let summary = conn
            .transaction::<_, _, AssessmentError>(move |txn| {
                Box::pin(async move { complete_in(txn, user_id, session_id).await })
            })
            .await
            .flatten_res()?;
        tracing::info!(
            %session_id,
            %user_id,
            final_level = summary.final_level.number(),
            "completed practice"
        );

        let rewards = self.award(user_id, session_id, summary.correct_answers).await;
        let session = SessionQuery::load_session(conn, user_id, session_id).await?;
        Ok(PracticeCompletion {
            session: session.try_into_model()?,
            summary,
            rewards,
        })
    }

    async fn award(&self, user_id: Uuid, session_id: Uuid, correct: i32) -> RewardGrant {
        let mut grant = RewardGrant::default();
        let gamification = &self.rewards.gamification;

        let xp = self.amounts.practice_xp_per_correct * correct;
        match gamification.add_xp(user_id, xp, "practice_session_complete").await {
            Ok(()) => grant.xp = xp,
            Err(error) => {
                tracing::error!(error = &error as &dyn Error, %session_id, %user_id, "failed to award practice xp");
            }
        }

        let coins = correct / self.amounts.practice_correct_per_coin.max(1);
        if coins > 0 {
            match gamification.add_coins(user_id, coins, "practice_coins").await {
                Ok(()) => grant.coins = coins,
                Err(error) => {
                    tracing::error!(error = &error as &dyn Error, %session_id, %user_id, "failed to award practice coins");
                }
            }
        }

        if let Err(error) = gamification.update_streak(user_id).await {
            tracing::error!(error = &error as &dyn Error, %session_id, %user_id, "failed to update streak");
        }
        grant
    }
}

fn ensure_open(session: &SessionModel) -> Result<(), AssessmentError> {
    if session.status == SessionStatus::Completed {
        return Err(AssessmentError::AlreadyCompleted);
    }
    if session.answered >= session.target_questions {
        return Err(AssessmentError::TargetReached);
    }
    Ok(())
}

async fn submit_in(
    txn: &DatabaseTransaction,
    user_id: Uuid,
    session_id: Uuid,
    request: SubmitAnswerRequest,
    threshold: u32,
) -> Result<PracticeSubmitResult, AssessmentError> {
    let session = SessionQuery::load_session(txn, user_id, session_id).await?;
    ensure_open(&session)?;
    let mut strategy: PracticeStrategy = (&session).try_into_model()?;

    let question = question::Query::find(txn, request.question_id).await?;
    let level = objective_level::Query::find(txn, question.objective_level_id).await?;
    let question_level = BloomLevel::try_from(level.bloom_level)
        .map_err(|error| AssessmentError::InvalidInput(error.to_string()))?;

    let key = parse_value(&question.validation_data)?;
    let score = validation::validate_answer(&question.kind, &key, &request.answer)?;
    question::Mutation::increment_usage(txn, question.id).await?;

    let answer = AnswerMutation::create(
        txn,
        NewPracticeAnswer {
            session_id,
            question_id: question.id,
            bloom_level: question_level.into(),
            answer: render(&request.answer)?,
            is_correct: score.is_correct,
            score: score.score,
            response_time_secs: request.response_time_secs,
        },
    )
    .await?;

    let new_level = strategy.record(question_level, score.is_correct, threshold);
    let answered = session.answered + 1;
    let correct = session.correct + i32::from(score.is_correct);
    let stored =
        SessionMutation::record_answer(txn, session_id, session.version, render(&strategy)?, answered, correct).await?;
    applied(stored)?;

    Ok(PracticeSubmitResult {
        answer_id: answer.id,
        is_correct: score.is_correct,
        score: score.score,
        new_bloom_level: new_level,
        answered,
        total: session.target_questions,
        is_complete: answered >= session.target_questions,
    })
}

async fn complete_in(
    txn: &DatabaseTransaction,
    user_id: Uuid,
    session_id: Uuid,
) -> Result<PracticeSummary, AssessmentError> {
    let session = SessionQuery::load_session(txn, user_id, session_id).await?;
    if session.status == SessionStatus::Completed {
        return Err(AssessmentError::AlreadyCompleted);
    }
    let strategy: PracticeStrategy = (&session).try_into_model()?;
    let initial = BloomLevel::try_from(session.initial_level)
        .map_err(|error| AssessmentError::InvalidInput(error.to_string()))?;

    let accuracy = if session.answered > 0 {
        f64::from(session.correct) / f64::from(session.answered) * 100.0
    } else {
        0.0
    };
    let final_level = final_level::final_level(&strategy.tallies, initial, accuracy);
    let summary = PracticeSummary {
        initial_level: initial,
        final_level,
        level_change: (i16::from(final_level) - i16::from(initial)).to_i8().unwrap_or(0),
        accuracy_percent: accuracy,
        total_questions: session.answered,
        correct_answers: session.correct,
        correct_by_level: strategy.correct_by_level(),
        incorrect_by_level: strategy.incorrect_by_level(),
        pattern: strategy.pattern.clone(),
    };

    let stored =
        SessionMutation::complete(txn, session_id, session.version, final_level.into(), render(&summary)?).await?;
    applied(stored)?;

    ProgressProjector::project(
        txn,
        ProgressUpdate {
            user_id,
            objective_level_id: session.objective_level_id,
            achieved_level: final_level,
            accuracy_percent: accuracy,
            correct: session.correct,
            total: session.answered,
            event: ProgressEventKind::Practice,
        },
    )
    .await?;
    Ok(summary)
}
