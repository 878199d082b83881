use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use http::StatusCode;
use lumera_model::status::Status;
use sea_orm::DatabaseConnection;
use serde_json::json;
use tracing::instrument;

pub fn create_router<S>() -> Router<S> {
    Router::new().route("/", get(get_status)).with_state(())
}

struct StatusResponse(Status);

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        let status_code = if self.0.is_ok() {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status_code, Json(self.0)).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/api/v0/status",
    responses(
        (status = OK, description = "Server is ok", body = Status, example = json!({"database": "ok"})),
        (status = INTERNAL_SERVER_ERROR, description = "A component is unavailable", body = Status),
    ),
    tag = "util"
)]
#[instrument(skip_all)]
pub(crate) async fn get_status(Extension(conn): Extension<DatabaseConnection>) -> impl IntoResponse {
    StatusResponse(lumera_core::status::status(&conn).await)
}
