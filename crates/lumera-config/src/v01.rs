pub mod config;

pub use config::EngineConfigV01;
