use lumera_model::bloom::InvalidBloomLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    BloomLevel(#[from] InvalidBloomLevel),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
