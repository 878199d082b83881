use crate::routes::api::v0::error::ApiError;
use axum::Extension;
use axum::extract::{Json, Path, Query};
use axum::response::IntoResponse;
use axum::routing::{Router, get, post};
use http::StatusCode;
use lumera_core::questions;
use lumera_model::question::{
    PublicQuestion, Question, QuestionInput, QuestionListQuery, QuestionTypeInfo, ValidateAnswerRequest,
    ValidateAnswerResponse,
};
use sea_orm::DatabaseConnection;
use tracing::instrument;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_questions).post(create_question))
        .route("/types", get(list_question_types))
        .nest(
            "/{question_id}",
            Router::new()
                .route("/", get(get_question).put(update_question))
                .route("/validate", post(validate_answer)),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/questions",
    params(QuestionListQuery),
    responses(
        (status = OK, body = Vec<PublicQuestion>, description = "Active questions without answer keys"),
    ),
    tag = "v0/questions"
)]
pub(crate) async fn list_questions(
    Extension(conn): Extension<DatabaseConnection>,
    Query(query): Query<QuestionListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(questions::list(&conn, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/v0/questions/types",
    responses(
        (status = OK, body = Vec<QuestionTypeInfo>, description = "Supported question types"),
    ),
    tag = "v0/questions"
)]
pub(crate) async fn list_question_types() -> impl IntoResponse {
    Json(questions::types())
}

#[utoipa::path(
    post,
    path = "/api/v0/questions",
    request_body = QuestionInput,
    responses(
        (status = CREATED, body = Question, description = "The stored question"),
        (status = BAD_REQUEST, description = "The payload or key misses fields required by its type"),
        (status = NOT_FOUND, description = "Unknown objective level"),
    ),
    tag = "v0/questions"
)]
#[instrument(skip_all, fields(kind = %input.kind))]
pub(crate) async fn create_question(
    Extension(conn): Extension<DatabaseConnection>,
    Json(input): Json<QuestionInput>,
) -> Result<impl IntoResponse, ApiError> {
    let question = questions::create(&conn, input).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

#[utoipa::path(
    get,
    path = "/api/v0/questions/{question_id}",
    params(("question_id" = i32, Path, description = "Question id")),
    responses(
        (status = OK, body = PublicQuestion, description = "The question without its answer key"),
        (status = NOT_FOUND, description = "Unknown question"),
    ),
    tag = "v0/questions"
)]
pub(crate) async fn get_question(
    Extension(conn): Extension<DatabaseConnection>,
    Path(question_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(questions::get(&conn, question_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/v0/questions/{question_id}",
    params(("question_id" = i32, Path, description = "Question id")),
    request_body = QuestionInput,
    responses(
        (status = OK, body = Question, description = "The updated question"),
        (status = BAD_REQUEST, description = "The payload or key misses fields required by its type"),
        (status = NOT_FOUND, description = "Unknown question or objective level"),
    ),
    tag = "v0/questions"
)]
#[instrument(skip_all, fields(question_id))]
pub(crate) async fn update_question(
    Extension(conn): Extension<DatabaseConnection>,
    Path(question_id): Path<i32>,
    Json(input): Json<QuestionInput>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(questions::update(&conn, question_id, input).await?))
}

#[utoipa::path(
    post,
    path = "/api/v0/questions/{question_id}/validate",
    params(("question_id" = i32, Path, description = "Question id")),
    request_body = ValidateAnswerRequest,
    responses(
        (status = OK, body = ValidateAnswerResponse, description = "Score of the answer, with the right answer when it was wrong"),
        (status = BAD_REQUEST, description = "The answer could not be scored"),
        (status = NOT_FOUND, description = "Unknown question"),
    ),
    tag = "v0/questions"
)]
#[instrument(skip_all, fields(question_id))]
pub(crate) async fn validate_answer(
    Extension(conn): Extension<DatabaseConnection>,
    Path(question_id): Path<i32>,
    Json(request): Json<ValidateAnswerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(questions::validate(&conn, question_id, &request.answer).await?))
}
