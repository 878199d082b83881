use crate::{AppConfig, routes};
use axum::{Extension, Router};
use http::{HeaderName, Method, header};
use sea_orm::DatabaseConnection;
use sentry_tower::NewSentryLayer;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

pub(crate) fn create_app(
    app_config: AppConfig,
    origins: &[String],
    conn: DatabaseConnection,
) -> anyhow::Result<Router> {
    if origins.is_empty() {
        tracing::info!("no cors origins configured");
    } else {
        tracing::info!(?origins, "allowing origins");
    }

    let api_cors = CorsLayer::new()
        .allow_origin(
            origins
                .iter()
                .map(|origin| origin.parse())
                .collect::<Result<Vec<_>, _>>()?,
        )
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            HeaderName::from_static(crate::user::USER_ID_HEADER),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .max_age(Duration::from_secs(3600));

    let app = Router::new()
        .merge(routes::swagger::create_router())
        .nest(
            "/api/v0",
            Router::new()
                .nest("/status", routes::api::v0::status::create_router())
                .nest("/diagnostics", routes::api::v0::diagnostic::create_router())
                .nest("/practice", routes::api::v0::practice::create_router())
                .nest("/questions", routes::api::v0::questions::create_router())
                .nest("/progress", routes::api::v0::progress::create_router())
                .layer(api_cors),
        )
        .layer(
            // Router layers are called bottom to top
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(NewSentryLayer::new_from_top())
                .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
                .layer(Extension(app_config))
                .layer(Extension(conn)),
        )
        .with_state(());
    Ok(app)
}
