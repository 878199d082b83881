use crate::AppConfig;
use crate::routes::api::v0::error::ApiError;
use crate::user::ExtractUserId;
use axum::Extension;
use axum::extract::{Json, Path, Query};
use axum::response::IntoResponse;
use axum::routing::{Router, get, post};
use http::StatusCode;
use lumera_model::practice::{
    PracticeCompletion, PracticeListQuery, PracticeSession, PracticeSessionDetail, PracticeSubmitResult,
    StartPracticeRequest,
};
use lumera_model::question::{NextQuestion, SubmitAnswerRequest};
use sea_orm::DatabaseConnection;
use tracing::instrument;
use uuid::Uuid;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_practice).post(start_practice))
        .nest(
            "/{session_id}",
            Router::new()
                .route("/", get(get_practice))
                .route("/next-question", get(next_question))
                .route("/answers", post(submit_answer))
                .route("/complete", post(complete_practice)),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/practice",
    params(PracticeListQuery),
    responses(
        (status = OK, body = Vec<PracticeSession>, description = "Practice sessions of the user, newest first"),
    ),
    tag = "v0/practice",
    security(("user_id" = []))
)]
pub(crate) async fn list_practice(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Query(query): Query<PracticeListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let sessions = app_config.practice().list(&conn, user_id, query).await?;
    Ok(Json(sessions))
}

#[utoipa::path(
    post,
    path = "/api/v0/practice",
    request_body = StartPracticeRequest,
    responses(
        (status = CREATED, body = PracticeSession, description = "The started session"),
        (status = BAD_REQUEST, description = "Invalid question count or level of another objective"),
        (status = NOT_FOUND, description = "Unknown objective level"),
    ),
    tag = "v0/practice",
    security(("user_id" = []))
)]
#[instrument(skip_all, fields(%user_id, objective_level_id = request.objective_level_id))]
pub(crate) async fn start_practice(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Json(request): Json<StartPracticeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = app_config.practice().start(&conn, user_id, request).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[utoipa::path(
    get,
    path = "/api/v0/practice/{session_id}",
    params(("session_id" = Uuid, Path, description = "Practice session id")),
    responses(
        (status = OK, body = PracticeSessionDetail, description = "The session with all answers so far"),
        (status = NOT_FOUND, description = "No such session for this user"),
    ),
    tag = "v0/practice",
    security(("user_id" = []))
)]
pub(crate) async fn get_practice(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = app_config.practice().get(&conn, user_id, session_id).await?;
    Ok(Json(detail))
}

#[utoipa::path(
    get,
    path = "/api/v0/practice/{session_id}/next-question",
    params(("session_id" = Uuid, Path, description = "Practice session id")),
    responses(
        (status = OK, body = NextQuestion, description = "A question at or next to the current level"),
        (status = BAD_REQUEST, description = "All questions of the session were answered"),
        (status = NOT_FOUND, description = "No question near the current level"),
        (status = CONFLICT, description = "The session is completed"),
    ),
    tag = "v0/practice",
    security(("user_id" = []))
)]
#[instrument(skip_all, fields(%session_id))]
pub(crate) async fn next_question(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let question = app_config.practice().next_question(&conn, user_id, session_id).await?;
    Ok(Json(question))
}

#[utoipa::path(
    post,
    path = "/api/v0/practice/{session_id}/answers",
    params(("session_id" = Uuid, Path, description = "Practice session id")),
    request_body = SubmitAnswerRequest,
    responses(
        (status = OK, body = PracticeSubmitResult, description = "Score of the answer and the session progress"),
        (status = BAD_REQUEST, description = "The answer could not be scored or the target was reached"),
        (status = UNPROCESSABLE_ENTITY, description = "The question type needs manual review"),
        (status = CONFLICT, description = "The session is completed or was changed concurrently"),
    ),
    tag = "v0/practice",
    security(("user_id" = []))
)]
#[instrument(skip_all, fields(%session_id, question_id = request.question_id))]
pub(crate) async fn submit_answer(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = app_config.practice().submit(&conn, user_id, session_id, request).await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/v0/practice/{session_id}/complete",
    params(("session_id" = Uuid, Path, description = "Practice session id")),
    responses(
        (status = OK, body = PracticeCompletion, description = "The completed session, its summary and the granted rewards"),
        (status = CONFLICT, description = "The session is already completed"),
    ),
    tag = "v0/practice",
    security(("user_id" = []))
)]
#[instrument(skip_all, fields(%session_id))]
pub(crate) async fn complete_practice(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let completion = app_config.practice().complete(&conn, user_id, session_id).await?;
    Ok(Json(completion))
}
