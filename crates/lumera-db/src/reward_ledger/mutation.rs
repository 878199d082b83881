use lumera_entity::reward_ledger::{ActiveModel as ActiveLedgerEntry, Model as LedgerEntry, RewardKind};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn record<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        kind: RewardKind,
        amount: i32,
        reason: String,
        payload: Option<String>,
    ) -> Result<LedgerEntry, DbErr> {
        ActiveLedgerEntry {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(kind),
            amount: ActiveValue::Set(amount),
            reason: ActiveValue::Set(reason.clone()),
            payload: ActiveValue::Set(payload),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
        }
        .insert(conn)
        .await
        .inspect_err(
            |error| tracing::error!(error = error as &dyn Error, %user_id, ?kind, %reason, "failed to record reward"),
        )
    }
}
