use crate::util::RequireRecord;
use lumera_entity::SessionStatus;
use lumera_entity::practice::session::{self, Entity as SessionEntity, Model as PracticeSession};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn load_session<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<PracticeSession, DbErr> {
        SessionEntity::find_by_id(session_id)
            .filter(session::Column::UserId.eq(user_id))
            .one(conn)
            .await
            .require()
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, %user_id, %session_id, "failed to load practice session"),
            )
    }

    pub async fn load_sessions<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        objective_id: Option<i32>,
        status: Option<SessionStatus>,
    ) -> Result<Vec<PracticeSession>, DbErr> {
        let mut query = SessionEntity::find().filter(session::Column::UserId.eq(user_id));
        if let Some(objective_id) = objective_id {
            query = query.filter(session::Column::ObjectiveId.eq(objective_id));
        }
        if let Some(status) = status {
            query = query.filter(session::Column::Status.eq(status));
        }
        query
            .order_by_desc(session::Column::StartedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %user_id, "failed to load practice sessions"))
    }
}
