use crate::util::Applied;
use chrono::Utc;
use lumera_entity::SessionStatus;
use lumera_entity::practice::session::{
    self, ActiveModel as ActivePracticeSession, Entity as SessionEntity, Model as PracticeSession,
};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

#[derive(Debug, Clone)]
pub struct NewPracticeSession {
    pub user_id: Uuid,
    pub objective_id: i32,
    pub objective_level_id: i32,
    pub initial_level: i16,
    pub target_questions: i32,
    pub strategy: String,
}

impl Mutation {
    pub async fn create<C: ConnectionTrait>(conn: &C, new: NewPracticeSession) -> Result<PracticeSession, DbErr> {
        let user_id = new.user_id;
        let objective_level_id = new.objective_level_id;
        ActivePracticeSession {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(new.user_id),
            objective_id: ActiveValue::Set(new.objective_id),
            objective_level_id: ActiveValue::Set(new.objective_level_id),
            initial_level: ActiveValue::Set(new.initial_level),
            final_level: ActiveValue::Set(None),
            target_questions: ActiveValue::Set(new.target_questions),
            answered: ActiveValue::Set(0),
            correct: ActiveValue::Set(0),
            status: ActiveValue::Set(SessionStatus::InProgress),
            strategy: ActiveValue::Set(new.strategy),
            summary: ActiveValue::Set(None),
            version: ActiveValue::Set(0),
            started_at: ActiveValue::Set(Utc::now().naive_utc()),
            completed_at: ActiveValue::NotSet,
        }
        .insert(conn)
        .await
        .inspect_err(|error| {
            tracing::error!(
                error = error as &dyn Error,
                %user_id,
                objective_level_id,
                "failed to create practice session"
            );
        })
    }

    /// Stores counters and strategy after an answer. Returns `false` if `version` is stale.
    pub async fn record_answer<C: ConnectionTrait>(
        conn: &C,
        session_id: Uuid,
        version: i32,
        strategy: String,
        answered: i32,
        correct: i32,
    ) -> Result<bool, DbErr> {
        let changes = ActivePracticeSession {
            strategy: ActiveValue::Set(strategy),
            answered: ActiveValue::Set(answered),
            correct: ActiveValue::Set(correct),
            ..Default::default()
        };
        Self::update_versioned(conn, session_id, version, changes).await
    }

    pub async fn complete<C: ConnectionTrait>(
        conn: &C,
        session_id: Uuid,
        version: i32,
        final_level: i16,
        summary: String,
    ) -> Result<bool, DbErr> {
        let changes = ActivePracticeSession {
            status: ActiveValue::Set(SessionStatus::Completed),
            final_level: ActiveValue::Set(Some(final_level)),
            summary: ActiveValue::Set(Some(summary)),
            completed_at: ActiveValue::Set(Some(Utc::now().naive_utc())),
            ..Default::default()
        };
        Self::update_versioned(conn, session_id, version, changes).await
    }

    async fn update_versioned<C: ConnectionTrait>(
        conn: &C,
        session_id: Uuid,
        version: i32,
        mut changes: ActivePracticeSession,
    ) -> Result<bool, DbErr> {
        changes.version = ActiveValue::Set(version + 1);
        SessionEntity::update_many()
            .set(changes)
            .filter(session::Column::Id.eq(session_id))
            .filter(session::Column::Version.eq(version))
            .exec(conn)
            .await
            .applied()
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, %session_id, "failed to update practice session"),
            )
    }
}
