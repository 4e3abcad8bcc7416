use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{self, AppState};

pub fn sales_routes() -> Router<AppState> {
    Router::new()
        .route("/api/sales", get(handlers::list_sales))
        .route("/api/sales/summary", get(handlers::sales_summary))
        .route("/api/reports/monthly", post(handlers::monthly_report))
}
