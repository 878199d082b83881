use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadingError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
