use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{self, AppState};

pub fn preset_routes() -> Router<AppState> {
    Router::new()
        .route("/api/presets", get(handlers::list_presets))
        .route("/api/presets", post(handlers::create_preset))
        .route("/api/presets/{id}", get(handlers::get_preset))
}
