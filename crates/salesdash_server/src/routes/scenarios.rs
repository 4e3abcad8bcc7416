use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers::{self, AppState};

pub fn scenario_routes() -> Router<AppState> {
    Router::new()
        // Scenario CRUD
        .route("/api/scenarios", get(handlers::list_scenarios))
        .route("/api/scenarios", post(handlers::create_scenario))
        .route("/api/scenarios/{id}", get(handlers::get_scenario))
        .route("/api/scenarios/{id}", put(handlers::update_scenario))
        .route("/api/scenarios/{id}", delete(handlers::delete_scenario))
        .route(
            "/api/scenarios/{id}/duplicate",
            post(handlers::duplicate_scenario),
        )
        // Side-by-side comparison
        .route("/api/scenarios/compare", post(handlers::compare_scenarios))
}
