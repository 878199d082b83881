//! Folds session outcomes into the per objective level progress record and its history.

use chrono::Utc;
use lumera_db::progress::history::{HistoryEntry, Mutation as HistoryMutation, Query as HistoryQuery};
use lumera_db::progress::objective::{Mutation as ProgressMutation, Query as ProgressQuery};
use lumera_entity::progress::objective::Model as ProgressModel;
use lumera_model::bloom::BloomLevel;
use lumera_model::progress::{MasteryState, ObjectiveProgress, ProgressEvent, ProgressEventKind};
use lumera_model_tools::convert::{IntoDbModel, IntoModel};
use num_traits::ToPrimitive;
use sea_orm::{ConnectionTrait, DbErr};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub user_id: Uuid,
    pub objective_level_id: i32,
    pub achieved_level: BloomLevel,
    /// Percentage, truncated when stored.
    pub accuracy_percent: f64,
    pub correct: i32,
    pub total: i32,
    pub event: ProgressEventKind,
}

pub struct ProgressProjector;

impl ProgressProjector {
    /// Upserts the progress row and appends one history row.
    ///
    /// The stored percentage only ever rises. State is overwritten, attempts always grow.
    pub async fn project<C: ConnectionTrait>(conn: &C, update: ProgressUpdate) -> Result<ProgressModel, DbErr> {
        let state = MasteryState::from_accuracy(update.accuracy_percent, update.total);
        let percent = update.accuracy_percent.trunc().to_i32().unwrap_or(0);
        let notes = format!(
            "Bloom level {} - {}/{} correctas",
            update.achieved_level.number(),
            update.correct,
            update.total
        );

        let progress = match ProgressQuery::find(conn, update.user_id, update.objective_level_id).await? {
            None => {
                ProgressMutation::insert(
                    conn,
                    update.user_id,
                    update.objective_level_id,
                    state.into_db_model(),
                    percent,
                    Some(notes.clone()),
                )
                .await?
            }
            Some(existing) => {
                let merged = ProgressModel {
                    state: state.into_db_model(),
                    achievement_percent: existing.achievement_percent.max(percent),
                    attempts: existing.attempts + 1,
                    last_activity: Utc::now().naive_utc(),
                    notes: Some(notes.clone()),
                    ..existing
                };
                ProgressMutation::update(conn, merged).await?
            }
        };

        HistoryMutation::append(
            conn,
            HistoryEntry {
                user_id: update.user_id,
                objective_level_id: update.objective_level_id,
                state: state.into_db_model(),
                achievement_percent: percent,
                event: update.event.into_db_model(),
                score_obtained: f64::from(update.correct),
                score_max: f64::from(update.total),
                notes: Some(notes),
            },
        )
        .await?;
        tracing::debug!(
            user_id = %update.user_id,
            objective_level_id = update.objective_level_id,
            ?state,
            "projected progress"
        );
        Ok(progress)
    }

    pub async fn list<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<ObjectiveProgress>, DbErr> {
        let rows = ProgressQuery::list_for_user(conn, user_id).await?;
        Ok(rows.into_iter().map(IntoModel::into_model).collect())
    }

    pub async fn history<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        objective_level_id: i32,
    ) -> Result<Vec<ProgressEvent>, DbErr> {
        let rows = HistoryQuery::list(conn, user_id, objective_level_id).await?;
        Ok(rows.into_iter().map(IntoModel::into_model).collect())
    }
}
