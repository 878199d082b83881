use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

/// Set by the gateway in front of the service after it authenticated the caller.
pub(crate) const USER_ID_HEADER: &str = "x-user-id";

type Rejection = (StatusCode, &'static str);

#[derive(Debug, Clone, Copy)]
pub(crate) struct ExtractUserId(pub Uuid);

impl<S> FromRequestParts<S> for ExtractUserId
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(USER_ID_HEADER) else {
            return Err((StatusCode::UNAUTHORIZED, "No user id provided"));
        };
        let user_id = value
            .to_str()
            .ok()
            .and_then(|value| Uuid::parse_str(value.trim()).ok())
            .ok_or_else(|| {
                tracing::debug!(header = ?value, "invalid user id header");
                (StatusCode::UNAUTHORIZED, "Invalid user id")
            })?;

        sentry::configure_scope(|scope| {
            scope.set_user(Some(sentry::User {
                id: Some(user_id.as_hyphenated().to_string()),
                ..Default::default()
            }));
        });
        Ok(Self(user_id))
    }
}
