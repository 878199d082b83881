use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use utoipa::openapi::{RefOr, Schema};
use utoipa::{PartialSchema, ToSchema, schema};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Status {
    pub database: ComponentStatus,
}

impl Status {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.database.is_ok()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ToSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentState {
    Ok,
    Error,
}

/// Serializes to the message when one is set, else to the bare state.
#[derive(Debug, Clone)]
pub struct ComponentStatus {
    state: ComponentState,
    message: Option<Value>,
}

impl PartialSchema for ComponentStatus {
    fn schema() -> RefOr<Schema> {
        schema!(String).into()
    }
}

impl ToSchema for ComponentStatus {}

impl Serialize for ComponentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.message {
            Some(message) => message.serialize(serializer),
            None => self.state.serialize(serializer),
        }
    }
}

impl<T, E> From<Result<T, E>> for ComponentStatus {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(_) => Self::error(),
        }
    }
}

impl ComponentStatus {
    #[must_use]
    pub fn ok() -> Self {
        Self { state: ComponentState::Ok, message: None }
    }

    #[must_use]
    pub fn error() -> Self {
        Self { state: ComponentState::Error, message: None }
    }

    #[must_use]
    pub fn from_error_text(message: &str) -> Self {
        Self {
            state: ComponentState::Error,
            message: Some(json!(message)),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.state == ComponentState::Ok
    }
}
