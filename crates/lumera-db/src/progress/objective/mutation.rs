use lumera_entity::progress::MasteryState;
use lumera_entity::progress::objective::{ActiveModel as ActiveProgress, Model as ObjectiveProgress};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn insert<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        objective_level_id: i32,
        state: MasteryState,
        achievement_percent: i32,
        notes: Option<String>,
    ) -> Result<ObjectiveProgress, DbErr> {
        ActiveProgress {
            user_id: ActiveValue::Set(user_id),
            objective_level_id: ActiveValue::Set(objective_level_id),
            state: ActiveValue::Set(state),
            achievement_percent: ActiveValue::Set(achievement_percent),
            attempts: ActiveValue::Set(1),
            last_activity: ActiveValue::Set(chrono::Utc::now().naive_utc()),
            notes: ActiveValue::Set(notes),
        }
        .insert(conn)
        .await
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, objective_level_id, "failed to insert progress");
        })
    }

    /// Writes back a progress row the caller already merged.
    pub async fn update<C: ConnectionTrait>(conn: &C, progress: ObjectiveProgress) -> Result<ObjectiveProgress, DbErr> {
        let user_id = progress.user_id;
        let objective_level_id = progress.objective_level_id;
        ActiveProgress {
            user_id: ActiveValue::Unchanged(progress.user_id),
            objective_level_id: ActiveValue::Unchanged(progress.objective_level_id),
            state: ActiveValue::Set(progress.state),
            achievement_percent: ActiveValue::Set(progress.achievement_percent),
            attempts: ActiveValue::Set(progress.attempts),
            last_activity: ActiveValue::Set(progress.last_activity),
            notes: ActiveValue::Set(progress.notes),
        }
        .update(conn)
        .await
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, objective_level_id, "failed to update progress");
        })
    }
}
