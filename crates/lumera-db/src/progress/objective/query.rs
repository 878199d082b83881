use lumera_entity::progress::objective::{self, Entity as ProgressEntity, Model as ObjectiveProgress};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        objective_level_id: i32,
    ) -> Result<Option<ObjectiveProgress>, DbErr> {
        ProgressEntity::find_by_id((user_id, objective_level_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, objective_level_id, "failed to load progress");
            })
    }

    pub async fn list_for_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<ObjectiveProgress>, DbErr> {
        ProgressEntity::find()
            .filter(objective::Column::UserId.eq(user_id))
            .order_by_asc(objective::Column::ObjectiveLevelId)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %user_id, "failed to list progress"))
    }
}
