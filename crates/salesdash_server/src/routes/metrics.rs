use axum::{Router, routing::post};

use crate::handlers::{self, AppState};

pub fn metrics_routes() -> Router<AppState> {
    Router::new()
        .route("/api/metrics", post(handlers::calculate_metrics))
        .route("/api/metrics/sweep", post(handlers::sweep_metrics))
}
