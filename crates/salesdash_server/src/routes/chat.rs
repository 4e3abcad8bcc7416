use axum::{Router, routing::post};

use crate::handlers::{self, AppState};

pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/api/chat", post(handlers::relay_chat))
}
