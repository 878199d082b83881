use crate::util::Applied;
use chrono::Utc;
use lumera_entity::SessionStatus;
use lumera_entity::diagnostic::session::{
    self, ActiveModel as ActiveDiagnosticSession, Entity as SessionEntity, Model as DiagnosticSession,
};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        subject_id: i32,
        attempt: i32,
        strategy: String,
    ) -> Result<DiagnosticSession, DbErr> {
        ActiveDiagnosticSession {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            subject_id: ActiveValue::Set(subject_id),
            attempt: ActiveValue::Set(attempt),
            status: ActiveValue::Set(SessionStatus::InProgress),
            strategy: ActiveValue::Set(strategy),
            total_questions: ActiveValue::Set(0),
            correct_answers: ActiveValue::Set(0),
            version: ActiveValue::Set(0),
            started_at: ActiveValue::Set(Utc::now().naive_utc()),
            completed_at: ActiveValue::NotSet,
        }
        .insert(conn)
        .await
        .inspect_err(
            |error| tracing::error!(error = error as &dyn Error, %user_id, subject_id, "failed to create diagnostic session"),
        )
    }

    /// Stores a new strategy document. Returns `false` if `version` is stale.
    pub async fn record_strategy<C: ConnectionTrait>(
        conn: &C,
        session_id: Uuid,
        version: i32,
        strategy: String,
    ) -> Result<bool, DbErr> {
        let changes = ActiveDiagnosticSession {
            strategy: ActiveValue::Set(strategy),
            ..Default::default()
        };
        Self::update_versioned(conn, session_id, version, changes).await
    }

    pub async fn record_answer<C: ConnectionTrait>(
        conn: &C,
        session_id: Uuid,
        version: i32,
        strategy: String,
        total_questions: i32,
        correct_answers: i32,
    ) -> Result<bool, DbErr> {
        let changes = ActiveDiagnosticSession {
            strategy: ActiveValue::Set(strategy),
            total_questions: ActiveValue::Set(total_questions),
            correct_answers: ActiveValue::Set(correct_answers),
            ..Default::default()
        };
        Self::update_versioned(conn, session_id, version, changes).await
    }

    pub async fn complete<C: ConnectionTrait>(conn: &C, session_id: Uuid, version: i32) -> Result<bool, DbErr> {
        let changes = ActiveDiagnosticSession {
            status: ActiveValue::Set(SessionStatus::Completed),
            completed_at: ActiveValue::Set(Some(Utc::now().naive_utc())),
            ..Default::default()
        };
        Self::update_versioned(conn, session_id, version, changes).await
    }

    async fn update_versioned<C: ConnectionTrait>(
        conn: &C,
        session_id: Uuid,
        version: i32,
        mut changes: ActiveDiagnosticSession,
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
                |error| tracing::error!(error = error as &dyn Error, %session_id, "failed to update diagnostic session"),
            )
    }
}
