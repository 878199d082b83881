use lumera_entity::progress::history::{self, Entity as HistoryEntity, Model as ObjectiveHistory};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn list<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        objective_level_id: i32,
    ) -> Result<Vec<ObjectiveHistory>, DbErr> {
        HistoryEntity::find()
            .filter(history::Column::UserId.eq(user_id))
            .filter(history::Column::ObjectiveLevelId.eq(objective_level_id))
            .order_by_asc(history::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, objective_level_id, "failed to load history");
            })
    }
}
