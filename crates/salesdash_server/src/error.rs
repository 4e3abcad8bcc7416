use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::chat::ChatError;
use salesdash_core::CalcError;

/// Custom error types for the SalesDash API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    #[error("Invalid parameter: {field} - {message}")]
    ValidationError { field: String, message: String },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(#[from] CalcError),

    #[error("The last remaining scenario cannot be deleted")]
    LastScenario,

    #[error("Invalid request format")]
    InvalidMessage,

    #[error("Authentication failed")]
    ChatUnauthorized,

    #[error("Rate limit exceeded")]
    ChatRateLimited,

    #[error("Chat upstream error: {0}")]
    ChatUpstream(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Mutex lock error")]
    LockError,

    #[error("Internal server error")]
    InternalError,
}

impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        ApiError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::SerializationError(err.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for ApiError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        ApiError::LockError
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Auth => ApiError::ChatUnauthorized,
            ChatError::RateLimited => ApiError::ChatRateLimited,
            ChatError::MissingApiKey
            | ChatError::UpstreamStatus { .. }
            | ChatError::Network(_)
            | ChatError::MalformedResponse => ApiError::ChatUpstream(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::ScenarioNotFound(_) | ApiError::PresetNotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }

            ApiError::ValidationError { .. }
            | ApiError::InvalidParameters(_)
            | ApiError::LastScenario
            | ApiError::InvalidMessage => (StatusCode::BAD_REQUEST, self.to_string()),

            ApiError::ChatUnauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),

            ApiError::ChatRateLimited => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),

            ApiError::ChatUpstream(_) => {
                tracing::error!("chat relay error: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error processing request".to_string(),
                )
            }

            ApiError::DatabaseError(_) | ApiError::SerializationError(_) => {
                tracing::error!("storage error: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal database error".to_string(),
                )
            }

            ApiError::LockError | ApiError::InternalError => {
                tracing::error!("internal error: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Helper type for API results
pub type ApiResult<T> = Result<T, ApiError>;
