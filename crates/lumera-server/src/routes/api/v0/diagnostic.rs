use crate::AppConfig;
use crate::routes::api::v0::error::ApiError;
use crate::user::ExtractUserId;
use axum::extract::{Json, Path};
use axum::response::IntoResponse;
use axum::routing::{Router, get, post};
use axum::Extension;
use http::StatusCode;
use lumera_model::diagnostic::{
    DiagnosticCompletion, DiagnosticResult, DiagnosticSession, DiagnosticSessionDetail, DiagnosticSubmitResult,
    StartDiagnosticRequest,
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
        .route("/", get(list_diagnostics).post(start_diagnostic))
        .nest(
            "/{session_id}",
            Router::new()
                .route("/", get(get_diagnostic))
                .route("/next-question", get(next_question))
                .route("/answers", post(submit_answer))
                .route("/complete", post(complete_diagnostic))
                .route("/results", get(get_results)),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/diagnostics",
    responses(
        (status = OK, body = Vec<DiagnosticSession>, description = "Diagnostic sessions of the user, newest first"),
    ),
    tag = "v0/diagnostics",
    security(("user_id" = []))
)]
pub(crate) async fn list_diagnostics(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
) -> Result<impl IntoResponse, ApiError> {
    let sessions = app_config.diagnostic().list(&conn, user_id).await?;
    Ok(Json(sessions))
}

#[utoipa::path(
    post,
    path = "/api/v0/diagnostics",
    request_body = StartDiagnosticRequest,
    responses(
        (status = CREATED, body = DiagnosticSession, description = "The started session"),
        (status = NOT_FOUND, description = "Unknown subject"),
    ),
    tag = "v0/diagnostics",
    security(("user_id" = []))
)]
#[instrument(skip_all, fields(%user_id, subject_id = request.subject_id))]
pub(crate) async fn start_diagnostic(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Json(request): Json<StartDiagnosticRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = app_config
        .diagnostic()
        .start(&conn, user_id, request.subject_id)
        .await?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[utoipa::path(
    get,
    path = "/api/v0/diagnostics/{session_id}",
    params(("session_id" = Uuid, Path, description = "Diagnostic session id")),
    responses(
        (status = OK, body = DiagnosticSessionDetail, description = "The session with all answers so far"),
        (status = NOT_FOUND, description = "No such session for this user"),
    ),
    tag = "v0/diagnostics",
    security(("user_id" = []))
)]
pub(crate) async fn get_diagnostic(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = app_config.diagnostic().progress(&conn, user_id, session_id).await?;
    Ok(Json(detail))
}

#[utoipa::path(
    get,
    path = "/api/v0/diagnostics/{session_id}/next-question",
    params(("session_id" = Uuid, Path, description = "Diagnostic session id")),
    responses(
        (status = OK, body = NextQuestion, description = "The next question without its answer key"),
        (status = NOT_FOUND, description = "No question left, the diagnostic should be completed"),
        (status = CONFLICT, description = "The session is completed"),
    ),
    tag = "v0/diagnostics",
    security(("user_id" = []))
)]
#[instrument(skip_all, fields(%session_id))]
pub(crate) async fn next_question(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let question = app_config.diagnostic().next_question(&conn, user_id, session_id).await?;
    Ok(Json(question))
}

#[utoipa::path(
    post,
    path = "/api/v0/diagnostics/{session_id}/answers",
    params(("session_id" = Uuid, Path, description = "Diagnostic session id")),
    request_body = SubmitAnswerRequest,
    responses(
        (status = OK, body = DiagnosticSubmitResult, description = "Score of the answer and the new Bloom level"),
        (status = BAD_REQUEST, description = "The answer could not be scored"),
        (status = CONFLICT, description = "The session is completed or was changed concurrently"),
    ),
    tag = "v0/diagnostics",
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
    let result = app_config
        .diagnostic()
        .submit(&conn, user_id, session_id, request)
        .await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/v0/diagnostics/{session_id}/complete",
    params(("session_id" = Uuid, Path, description = "Diagnostic session id")),
    responses(
        (status = OK, body = DiagnosticCompletion, description = "The completed session with one result per objective"),
        (status = CONFLICT, description = "The session is already completed"),
    ),
    tag = "v0/diagnostics",
    security(("user_id" = []))
)]
#[instrument(skip_all, fields(%session_id))]
pub(crate) async fn complete_diagnostic(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let completion = app_config.diagnostic().complete(&conn, user_id, session_id).await?;
    Ok(Json(completion))
}

#[utoipa::path(
    get,
    path = "/api/v0/diagnostics/{session_id}/results",
    params(("session_id" = Uuid, Path, description = "Diagnostic session id")),
    responses(
        (status = OK, body = Vec<DiagnosticResult>, description = "Results per objective, empty before completion"),
    ),
    tag = "v0/diagnostics",
    security(("user_id" = []))
)]
pub(crate) async fn get_results(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let results = app_config.diagnostic().results(&conn, user_id, session_id).await?;
    Ok(Json(results))
}
