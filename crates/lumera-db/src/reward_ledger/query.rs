use lumera_entity::reward_ledger::{self, Entity as LedgerEntity, Model as LedgerEntry};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn list_for_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<LedgerEntry>, DbErr> {
        LedgerEntity::find()
            .filter(reward_ledger::Column::UserId.eq(user_id))
            .order_by_asc(reward_ledger::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %user_id, "failed to load reward ledger"))
    }
}
