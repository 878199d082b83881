pub mod engine;
pub mod error;
pub mod v01;

pub use engine::{DiagnosticConfig, EngineConfig, PracticeConfig, RewardConfig};

use crate::error::LoadingError;
use schemars::JsonSchema;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
#[serde(tag = "version")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { lumera: v01::EngineConfigV01 },
}

pub fn parse(content: &[u8]) -> Result<EngineConfig, LoadingError> {
    let VersionConfig::V01 { lumera } = serde_yml::from_slice::<VersionConfig>(content)?;
    let config: EngineConfig = lumera.into();
    config.validate()?;
    Ok(config)
}

/// Loads engine settings from a YAML file. Without a path the defaults apply.
pub async fn load(path: Option<&Path>) -> Result<EngineConfig, LoadingError> {
    let Some(path) = path else {
        tracing::debug!("No engine config given, using defaults");
        return Ok(EngineConfig::default());
    };
    tracing::debug!(path = %path.display(), "Loading engine config");
    let content = tokio::fs::read(path).await?;
    parse(&content)
}

/// JSON schema of the config file, for editor support.
#[must_use]
pub fn json_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(VersionConfig)
}
