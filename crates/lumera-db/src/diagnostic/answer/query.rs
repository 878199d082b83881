use lumera_entity::diagnostic::answer::{self, Entity as AnswerEntity, Model as DiagnosticAnswer};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    /// Answers in submission order.
    pub async fn load_for_session<C: ConnectionTrait>(
        conn: &C,
        session_id: Uuid,
    ) -> Result<Vec<DiagnosticAnswer>, DbErr> {
        AnswerEntity::find()
            .filter(answer::Column::SessionId.eq(session_id))
            .order_by_asc(answer::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, %session_id, "failed to load diagnostic answers"),
            )
    }
}
