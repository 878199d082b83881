use crate::util::RequireRecord;
use lumera_entity::diagnostic::session::{self, Entity as SessionEntity, Model as DiagnosticSession};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn load_session<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<DiagnosticSession, DbErr> {
        SessionEntity::find_by_id(session_id)
            .filter(session::Column::UserId.eq(user_id))
            .one(conn)
            .await
            .require()
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, %user_id, %session_id, "failed to load diagnostic session"),
            )
    }

    pub async fn load_sessions<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<DiagnosticSession>, DbErr> {
        SessionEntity::find()
            .filter(session::Column::UserId.eq(user_id))
            .order_by_desc(session::Column::StartedAt)
            .all(conn)
            .await
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, %user_id, "failed to load diagnostic sessions"),
            )
    }

    pub async fn count_attempts<C: ConnectionTrait>(conn: &C, user_id: Uuid, subject_id: i32) -> Result<u64, DbErr> {
        SessionEntity::find()
            .filter(session::Column::UserId.eq(user_id))
            .filter(session::Column::SubjectId.eq(subject_id))
            .count(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, subject_id, "failed to count diagnostic attempts");
            })
    }
}
