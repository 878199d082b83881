use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("validation not implemented for question type {0}")]
    NotImplemented(String),
    /// Not a failure. The answer needs a human or AI grader.
    #[error("requires manual or AI validation")]
    ManualReviewRequired,
    #[error("answer must contain '{0}'")]
    MissingAnswerField(&'static str),
    #[error("validation key must contain one of {}", .0.join(", "))]
    MissingKeyField(&'static [&'static str]),
    #[error("validation key '{0}' has no entries")]
    EmptyKey(&'static str),
    #[error("no criterion has both a submitted and an expected rating")]
    NoOverlap,
    #[error("unknown question type: {0}")]
    UnknownType(String),
    #[error("{payload} of a {kind} question must contain '{field}'")]
    MissingStructure {
        kind: &'static str,
        payload: &'static str,
        field: &'static str,
    },
    #[error("{0} must be a JSON object")]
    NotAnObject(&'static str),
}
