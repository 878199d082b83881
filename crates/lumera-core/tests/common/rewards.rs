use async_trait::async_trait;
use lumera_core::rewards::{GamificationService, RewardError, UnlockEvent, UnlockService};
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum Award {
    Xp(i32, String),
    Coins(i32, String),
    Streak,
    Unlock(UnlockEvent),
}

#[derive(Default)]
pub struct RecordingRewards {
    awards: Mutex<Vec<(Uuid, Award)>>,
    failing: bool,
}

impl RecordingRewards {
    /// Records every call, then rejects xp and unlocks.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn awards(&self) -> Vec<(Uuid, Award)> {
        self.awards.lock().unwrap().clone()
    }

    /// Diagnostic rewards run detached, poll until `count` arrived.
    pub async fn wait_for(&self, count: usize) -> Vec<(Uuid, Award)> {
        for _ in 0..100 {
            let awards = self.awards();
            if awards.len() >= count {
                return awards;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("expected {count} awards, got {:?}", self.awards());
    }

    fn push(&self, user_id: Uuid, award: Award) {
        self.awards.lock().unwrap().push((user_id, award));
    }

    fn reject(&self, what: &str) -> Result<(), RewardError> {
        if self.failing {
            Err(RewardError::Rejected(format!("{what} unavailable")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl GamificationService for RecordingRewards {
    async fn add_xp(&self, user_id: Uuid, amount: i32, reason: &str) -> Result<(), RewardError> {
        self.push(user_id, Award::Xp(amount, reason.to_owned()));
        self.reject("xp")
    }

    async fn add_coins(&self, user_id: Uuid, amount: i32, reason: &str) -> Result<(), RewardError> {
        self.push(user_id, Award::Coins(amount, reason.to_owned()));
        Ok(())
    }

    async fn update_streak(&self, user_id: Uuid) -> Result<(), RewardError> {
        self.push(user_id, Award::Streak);
        Ok(())
    }
}

#[async_trait]
impl UnlockService for RecordingRewards {
    async fn check_and_unlock(&self, user_id: Uuid, event: UnlockEvent) -> Result<(), RewardError> {
        self.push(user_id, Award::Unlock(event));
        self.reject("unlocks")
    }
}
