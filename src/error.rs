use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use provisioning_engine::Error as EngineError;
use serde_json::Value as JsonValue;
use std::borrow::Cow;

#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub(crate) struct ServerError {
    #[serde(skip)]
    code: StatusCode,
    pub message: Cow<'static, str>,
    #[schema(value_type = Object)]
    pub details: Option<JsonValue>,
}

impl ServerError {
    pub(crate) fn internal() -> Self {
        Self {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: Cow::Borrowed("internal server error"),
            details: None,
        }
    }

    pub(crate) fn bad_request(message: Cow<'static, str>) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST,
            message,
            details: None,
        }
    }

    pub(crate) fn not_found() -> Self {
        Self {
            code: StatusCode::NOT_FOUND,
            message: Cow::Borrowed("resource not found"),
            details: None,
        }
    }

    pub(crate) fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    pub(crate) fn details(mut self, details: JsonValue) -> Self {
        self.details = Some(details);
        self
    }

    #[cfg(test)]
    pub(crate) fn code(&self) -> StatusCode {
        self.code
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        (self.code, Json(self)).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidResource(message) => {
                metrics::counter!("server_error", "origin" => "validation").increment(1);
                tracing::debug!("invalid resource: {message}");
                ServerError::bad_request(message)
            }
            EngineError::NotFound {
                resource_type,
                resource_id,
            } => {
                tracing::debug!("{resource_type} {resource_id:?} not found");
                ServerError::not_found()
                    .message(format!("{resource_type} not found"))
                    .details(serde_json::json!({
                        "resourceType": resource_type,
                        "resourceId": resource_id,
                    }))
            }
            EngineError::Internal(message) => {
                metrics::counter!("server_error", "origin" => "engine").increment(1);
                tracing::error!("engine error: {message}");
                ServerError::internal().message(message)
            }
            EngineError::Storage(inner) => {
                metrics::counter!("server_error", "origin" => "store").increment(1);
                tracing::error!("store error: {inner:?}");
                ServerError::internal().details(serde_json::json!({
                    "origin": "store",
                }))
            }
        }
    }
}
