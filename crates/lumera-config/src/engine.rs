use crate::error::LoadingError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub diagnostic: DiagnosticConfig,
    pub practice: PracticeConfig,
    pub rewards: RewardConfig,
}

impl EngineConfig {
    pub(crate) fn validate(&self) -> Result<(), LoadingError> {
        if !(1..=6).contains(&self.diagnostic.initial_level) {
            return Err(LoadingError::Invalid(format!(
                "diagnostic initial level {} is outside 1..=6",
                self.diagnostic.initial_level
            )));
        }
        if self.diagnostic.objective_count == 0 {
            return Err(LoadingError::Invalid("diagnostic objective count must be positive".to_owned()));
        }
        if self.practice.default_target <= 0 {
            return Err(LoadingError::Invalid("practice default target must be positive".to_owned()));
        }
        if self.practice.streak_threshold == 0 {
            return Err(LoadingError::Invalid("practice streak threshold must be positive".to_owned()));
        }
        if self.rewards.practice_correct_per_coin <= 0 {
            return Err(LoadingError::Invalid("correct answers per coin must be positive".to_owned()));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case", default)]
pub struct DiagnosticConfig {
    /// Bloom level a new diagnostic starts at.
    pub initial_level: u8,
    /// Maximum number of objectives probed per diagnostic.
    pub objective_count: u64,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            initial_level: 2,
            objective_count: 5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case", default)]
pub struct PracticeConfig {
    pub default_target: i32,
    /// Consecutive equal outcomes that move the level.
    pub streak_threshold: u32,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            default_target: 10,
            streak_threshold: 2,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case", default)]
pub struct RewardConfig {
    pub diagnostic_xp: i32,
    pub diagnostic_excellent_coins: i32,
    pub diagnostic_good_coins: i32,
    pub practice_xp_per_correct: i32,
    pub practice_correct_per_coin: i32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            diagnostic_xp: 100,
            diagnostic_excellent_coins: 50,
            diagnostic_good_coins: 25,
            practice_xp_per_correct: 5,
            practice_correct_per_coin: 5,
        }
    }
}
