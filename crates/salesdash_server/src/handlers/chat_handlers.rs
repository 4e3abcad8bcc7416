use axum::{Json, extract::State};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::ChatResponse;
use crate::validation;

/// Relay one user message to the upstream chat-completion API.
///
/// The body is taken as loose JSON so a missing or non-string `message`
/// maps to a 400 instead of the extractor's rejection.
pub async fn relay_chat(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<ChatResponse>> {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .ok_or(ApiError::InvalidMessage)?;
    validation::validate_chat_message(message)?;

    let reply = state.chat.ask(message).await?;

    Ok(Json(ChatResponse {
        response: reply.response,
        citations: reply.citations,
    }))
}
