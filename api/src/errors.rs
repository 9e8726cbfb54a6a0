use crate::storage::StoreError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

pub const USER_NOT_FOUND: &str = "Usuário não encontrado";
pub const POST_NOT_FOUND: &str = "Post não encontrado";

#[derive(Debug)]
pub enum ApiError {
    NotFound(&'static str),
    ValidationError(String),
    InternalError(String),
}

/// Convert our custom errors to HTTP responses
///
/// Every error body has the shape `{"detail": "..."}`. Backend failures
/// pass their raw error text through to the caller.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            ApiError::ValidationError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (
            status,
            Json(serde_json::json!({
              "detail": detail
            })),
        )
            .into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

/// Malformed, incomplete or mistyped request bodies are all validation
/// failures.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ValidationError(rejection.body_text())
    }
}
