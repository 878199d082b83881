use lumera_entity::practice::answer::{self, Entity as AnswerEntity, Model as PracticeAnswer};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn load_for_session<C: ConnectionTrait>(conn: &C, session_id: Uuid) -> Result<Vec<PracticeAnswer>, DbErr> {
        AnswerEntity::find()
            .filter(answer::Column::SessionId.eq(session_id))
            .order_by_asc(answer::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, %session_id, "failed to load practice answers"),
            )
    }
}
