use crate::validation::ValidationError;
use lumera_model_tools::error::Error as DocumentError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Validation(ValidationError),
    #[error("question requires manual or AI validation")]
    ManualReviewRequired,
    #[error("{0}")]
    InvalidInput(String),
    #[error("session already reached its question target")]
    TargetReached,
    #[error("session is already completed")]
    AlreadyCompleted,
    #[error("session was modified concurrently")]
    Conflict,
    #[error("Database error: {0}")]
    Database(DbErr),
    #[error("stored document is invalid: {0}")]
    Document(#[from] DocumentError),
}

impl From<DbErr> for AssessmentError {
    fn from(error: DbErr) -> Self {
        match error {
            DbErr::RecordNotFound(message) => Self::NotFound(message),
            error => Self::Database(error),
        }
    }
}

impl From<ValidationError> for AssessmentError {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::ManualReviewRequired => Self::ManualReviewRequired,
            error => Self::Validation(error),
        }
    }
}

/// Turns the result of a version guarded update into [`AssessmentError::Conflict`] when it missed.
pub(crate) fn applied(updated: bool) -> Result<(), AssessmentError> {
    if updated { Ok(()) } else { Err(AssessmentError::Conflict) }
}
