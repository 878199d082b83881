use super::api;

use axum::Router;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

struct SecurityAddon;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::v0::status::get_status,
        api::v0::diagnostic::list_diagnostics,
        api::v0::diagnostic::start_diagnostic,
        api::v0::diagnostic::get_diagnostic,
        api::v0::diagnostic::next_question,
        api::v0::diagnostic::submit_answer,
        api::v0::diagnostic::complete_diagnostic,
        api::v0::diagnostic::get_results,
        api::v0::practice::list_practice,
        api::v0::practice::start_practice,
        api::v0::practice::get_practice,
        api::v0::practice::next_question,
        api::v0::practice::submit_answer,
        api::v0::practice::complete_practice,
        api::v0::questions::list_questions,
        api::v0::questions::list_question_types,
        api::v0::questions::create_question,
        api::v0::questions::get_question,
        api::v0::questions::update_question,
        api::v0::questions::validate_answer,
        api::v0::progress::get_progress,
        api::v0::progress::get_history,
    ),
    components(schemas(api::v0::error::ApiErrorType)),
    modifiers(&SecurityAddon),
    tags()
)]
pub(crate) struct ApiDoc;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "user_id",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                crate::user::USER_ID_HEADER,
                "Id of the authenticated user, set by the gateway",
            ))),
        );
    }
}

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        // RapiDoc points at the document served by SwaggerUi
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
}
