use lumera_entity::progress::MasteryState;
use lumera_entity::progress::history::{ActiveModel as ActiveHistory, EventKind, Model as ObjectiveHistory};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub user_id: Uuid,
    pub objective_level_id: i32,
    pub state: MasteryState,
    pub achievement_percent: i32,
    pub event: EventKind,
    pub score_obtained: f64,
    pub score_max: f64,
    pub notes: Option<String>,
}

impl Mutation {
    pub async fn append<C: ConnectionTrait>(conn: &C, entry: HistoryEntry) -> Result<ObjectiveHistory, DbErr> {
        let user_id = entry.user_id;
        let objective_level_id = entry.objective_level_id;
        ActiveHistory {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(entry.user_id),
            objective_level_id: ActiveValue::Set(entry.objective_level_id),
            state: ActiveValue::Set(entry.state),
            achievement_percent: ActiveValue::Set(entry.achievement_percent),
            event: ActiveValue::Set(entry.event),
            score_obtained: ActiveValue::Set(entry.score_obtained),
            score_max: ActiveValue::Set(entry.score_max),
            notes: ActiveValue::Set(entry.notes),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
        }
        .insert(conn)
        .await
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, objective_level_id, "failed to append history");
        })
    }
}
