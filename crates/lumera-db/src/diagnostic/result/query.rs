use lumera_entity::diagnostic::result::{self, Entity as ResultEntity, Model as DiagnosticResult};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn load_for_session<C: ConnectionTrait>(
        conn: &C,
        session_id: Uuid,
    ) -> Result<Vec<DiagnosticResult>, DbErr> {
        ResultEntity::find()
            .filter(result::Column::SessionId.eq(session_id))
            .order_by_asc(result::Column::ObjectiveId)
            .all(conn)
            .await
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, %session_id, "failed to load diagnostic results"),
            )
    }
}
