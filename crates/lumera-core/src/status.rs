use lumera_model::status::{ComponentStatus, Status};
use sea_orm::prelude::Expr;
use sea_orm::sea_query::Query;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use std::error::Error;
use std::time::Duration;
use tokio::time::timeout;
use tracing::instrument;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[instrument(skip_all)]
pub async fn database_status(conn: &DatabaseConnection, duration: Option<Duration>) -> ComponentStatus {
    let mut query = Query::select();
    query.expr(Expr::current_timestamp());
    match timeout(
        duration.unwrap_or(DEFAULT_TIMEOUT),
        conn.execute(conn.get_database_backend().build(&query)),
    )
    .await
    {
        Ok(result) => result
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "db error during health check"))
            .into(),
        Err(error) => {
            tracing::error!(error = &error as &dyn Error, "db health check timed out");
            ComponentStatus::from_error_text("timeout")
        }
    }
}

pub async fn status(conn: &DatabaseConnection) -> Status {
    Status {
        database: database_status(conn, None).await,
    }
}
