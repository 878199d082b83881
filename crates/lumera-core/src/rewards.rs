//! Gamification collaborators invoked after a session completes.
//!
//! The engines only see the [`GamificationService`] and [`UnlockService`] traits. [`LedgerRewards`]
//! records every award in the `reward_ledger` table, tests plug in recording doubles.

use async_trait::async_trait;
use lumera_db::reward_ledger::Mutation as LedgerMutation;
use lumera_entity::reward_ledger::RewardKind;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RewardError {
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("reward rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnlockEvent {
    pub kind: String,
    pub key: String,
    pub data: Value,
}

#[async_trait]
pub trait GamificationService: Send + Sync {
    async fn add_xp(&self, user_id: Uuid, amount: i32, reason: &str) -> Result<(), RewardError>;

    async fn add_coins(&self, user_id: Uuid, amount: i32, reason: &str) -> Result<(), RewardError>;

    async fn update_streak(&self, user_id: Uuid) -> Result<(), RewardError>;
}

#[async_trait]
pub trait UnlockService: Send + Sync {
    async fn check_and_unlock(&self, user_id: Uuid, event: UnlockEvent) -> Result<(), RewardError>;
}

/// Collaborators handed to the engines at construction.
#[derive(Clone)]
pub struct Rewards {
    pub gamification: Arc<dyn GamificationService>,
    pub unlocks: Arc<dyn UnlockService>,
}

impl Rewards {
    pub fn new(gamification: Arc<dyn GamificationService>, unlocks: Arc<dyn UnlockService>) -> Self {
        Self { gamification, unlocks }
    }

    /// Both collaborators backed by the reward ledger.
    #[must_use]
    pub fn ledger(conn: DatabaseConnection) -> Self {
        let ledger = Arc::new(LedgerRewards::new(conn));
        Self {
            gamification: ledger.clone(),
            unlocks: ledger,
        }
    }
}

pub struct LedgerRewards {
    conn: DatabaseConnection,
}

impl LedgerRewards {
    #[must_use]
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    async fn record(
        &self,
        user_id: Uuid,
        kind: RewardKind,
        amount: i32,
        reason: &str,
        payload: Option<String>,
    ) -> Result<(), RewardError> {
        if amount < 0 {
            return Err(RewardError::Rejected(format!("negative amount {amount} for {reason}")));
        }
        LedgerMutation::record(&self.conn, user_id, kind, amount, reason.to_owned(), payload).await?;
        tracing::debug!(%user_id, ?kind, amount, %reason, "recorded reward");
        Ok(())
    }
}

#[async_trait]
impl GamificationService for LedgerRewards {
    async fn add_xp(&self, user_id: Uuid, amount: i32, reason: &str) -> Result<(), RewardError> {
        self.record(user_id, RewardKind::Xp, amount, reason, None).await
    }

    async fn add_coins(&self, user_id: Uuid, amount: i32, reason: &str) -> Result<(), RewardError> {
        self.record(user_id, RewardKind::Coins, amount, reason, None).await
    }

    async fn update_streak(&self, user_id: Uuid) -> Result<(), RewardError> {
        self.record(user_id, RewardKind::Streak, 1, "activity", None).await
    }
}

#[async_trait]
impl UnlockService for LedgerRewards {
    async fn check_and_unlock(&self, user_id: Uuid, event: UnlockEvent) -> Result<(), RewardError> {
        let payload = serde_json::to_string(&event.data)?;
        self.record(user_id, RewardKind::Unlock, 0, &format!("{}:{}", event.kind, event.key), Some(payload))
            .await
    }
}
