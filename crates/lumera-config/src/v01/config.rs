use crate::engine::{DiagnosticConfig, EngineConfig, PracticeConfig, RewardConfig};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct EngineConfigV01 {
    #[serde(default)]
    pub diagnostic: DiagnosticConfig,
    #[serde(default)]
    pub practice: PracticeConfig,
    #[serde(default)]
    pub rewards: RewardConfig,
}

impl From<EngineConfigV01> for EngineConfig {
    fn from(value: EngineConfigV01) -> Self {
        Self {
            diagnostic: value.diagnostic,
            practice: value.practice,
            rewards: value.rewards,
        }
    }
}
