use crate::routes::api::v0::error::ApiError;
use crate::user::ExtractUserId;
use axum::Extension;
use axum::extract::{Json, Path};
use axum::response::IntoResponse;
use axum::routing::{Router, get};
use lumera_core::progress::ProgressProjector;
use lumera_model::progress::{ObjectiveProgress, ProgressEvent};
use sea_orm::DatabaseConnection;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_progress))
        .route("/{objective_level_id}/history", get(get_history))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/progress",
    responses(
        (status = OK, body = Vec<ObjectiveProgress>, description = "Progress of the user per objective level"),
    ),
    tag = "v0/progress",
    security(("user_id" = []))
)]
pub(crate) async fn get_progress(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(ProgressProjector::list(&conn, user_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/v0/progress/{objective_level_id}/history",
    params(("objective_level_id" = i32, Path, description = "Objective level id")),
    responses(
        (status = OK, body = Vec<ProgressEvent>, description = "Progress events, oldest first"),
    ),
    tag = "v0/progress",
    security(("user_id" = []))
)]
pub(crate) async fn get_history(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(objective_level_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(ProgressProjector::history(&conn, user_id, objective_level_id).await?))
}
