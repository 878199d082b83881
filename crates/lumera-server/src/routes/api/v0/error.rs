use crate::routes::error::{ErrorData, ErrorDataProvider, GetStatusCode, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use lumera_core::error::AssessmentError;
use lumera_core::validation::ValidationError;
use sea_orm::DbErr;
use serde_derive::Serialize;
use serde_json::{Map, Value};
use std::error::Error;
use thiserror::Error;
use utoipa::ToSchema;

/// Error of every `/api/v0` handler.
#[derive(Error, Debug)]
pub(crate) enum ApiError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error("Database error")]
    Database(#[from] DbErr),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ApiErrorType {
    NotFound,
    Validation,
    ManualReviewRequired,
    InvalidInput,
    TargetReached,
    AlreadyCompleted,
    Conflict,
    Database,
    Internal,
}

impl GetStatusCode for ApiErrorType {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation | Self::InvalidInput | Self::TargetReached => StatusCode::BAD_REQUEST,
            Self::ManualReviewRequired => StatusCode::UNPROCESSABLE_ENTITY,
            Self::AlreadyCompleted | Self::Conflict => StatusCode::CONFLICT,
            Self::Database => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl GetStatusCode for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn validation_data(error: &ValidationError) -> Option<Map<String, Value>> {
    let mut data = Map::new();
    match error {
        ValidationError::MissingStructure { kind, payload, field } => {
            data.insert("type".to_owned(), Value::from(*kind));
            data.insert("payload".to_owned(), Value::from(*payload));
            data.insert("field".to_owned(), Value::from(*field));
        }
        ValidationError::MissingAnswerField(field) | ValidationError::EmptyKey(field) => {
            data.insert("field".to_owned(), Value::from(*field));
        }
        ValidationError::MissingKeyField(aliases) => {
            data.insert("fields".to_owned(), Value::from(aliases.to_vec()));
        }
        _ => return None,
    }
    Some(data)
}

impl ErrorDataProvider<ApiErrorType> for ApiError {
    fn error_data(self) -> Option<ErrorData<ApiErrorType>> {
        let error = match self {
            Self::Assessment(error) => error,
            Self::Database(error) => AssessmentError::from(error),
        };
        let data = match error {
            AssessmentError::NotFound(what) => ErrorData::new(ApiErrorType::NotFound, what),
            AssessmentError::Validation(error) => {
                let data = validation_data(&error);
                let error_data = ErrorData::new(ApiErrorType::Validation, error.to_string());
                match data {
                    Some(data) => error_data.with_data(data),
                    None => error_data,
                }
            }
            AssessmentError::ManualReviewRequired => ErrorData::new(
                ApiErrorType::ManualReviewRequired,
                "answers to this question type need manual review",
            ),
            AssessmentError::InvalidInput(message) => ErrorData::new(ApiErrorType::InvalidInput, message),
            AssessmentError::TargetReached => {
                ErrorData::new(ApiErrorType::TargetReached, "the session already has all its answers")
            }
            AssessmentError::AlreadyCompleted => {
                ErrorData::new(ApiErrorType::AlreadyCompleted, "the session is already completed")
            }
            AssessmentError::Conflict => {
                ErrorData::new(ApiErrorType::Conflict, "the session was changed concurrently, retry")
            }
            AssessmentError::Database(error) => {
                tracing::error!(error = &error as &dyn Error, "error communicating with database");
                ErrorData::new(ApiErrorType::Database, "error communicating with database")
            }
            AssessmentError::Document(error) => {
                tracing::error!(error = &error as &dyn Error, "stored document is invalid");
                ErrorData::new(ApiErrorType::Internal, "stored data could not be read")
            }
        };
        Some(data)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
