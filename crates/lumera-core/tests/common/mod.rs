#![allow(dead_code)]

pub mod catalog;
pub mod rewards;

use lumera_config::EngineConfig;
use lumera_core::diagnostic::DiagnosticEngine;
use lumera_core::practice::PracticeEngine;
use lumera_core::rewards::Rewards;
use rewards::RecordingRewards;
use sea_orm::{Database, DbConn};
use std::sync::Arc;

pub async fn connect() -> DbConn {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    lumera_db::schema::apply(&db).await.unwrap();
    db
}

pub struct Engines {
    pub diagnostic: DiagnosticEngine,
    pub practice: PracticeEngine,
    pub recorder: Arc<RecordingRewards>,
}

pub fn engines(config: &EngineConfig) -> Engines {
    engines_with(config, RecordingRewards::default())
}

pub fn engines_with(config: &EngineConfig, recorder: RecordingRewards) -> Engines {
    let recorder = Arc::new(recorder);
    let rewards = Rewards::new(recorder.clone(), recorder.clone());
    Engines {
        diagnostic: DiagnosticEngine::new(config, rewards.clone()),
        practice: PracticeEngine::new(config, rewards),
        recorder,
    }
}
