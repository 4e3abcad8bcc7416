use axum::{Json, extract::State};

use salesdash_core::report::MonthlyReport;
use salesdash_core::sales::{SalesRecord, summarize};

use crate::error::ApiResult;
use crate::handlers::{AppState, DbConn};
use crate::models::{ReportRequest, SalesSummaryResponse};
use crate::validation;

pub async fn list_sales(State(state): State<AppState>) -> ApiResult<Json<Vec<SalesRecord>>> {
    Ok(Json(fetch_sales(&state.db)?))
}

pub async fn sales_summary(
    State(state): State<AppState>,
) -> ApiResult<Json<SalesSummaryResponse>> {
    let records = fetch_sales(&state.db)?;
    let summary = summarize(&records);
    Ok(Json(SalesSummaryResponse {
        metrics: summary.to_metrics(),
        summary,
    }))
}

/// Assemble the structured monthly-report object; rendering is external
pub async fn monthly_report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> ApiResult<Json<MonthlyReport>> {
    validation::validate_report_period(&req.month, &req.year)?;

    let records = fetch_sales(&state.db)?;
    let summary = summarize(&records);
    Ok(Json(MonthlyReport::build(
        &req.month,
        &req.year,
        &summary,
        req.options,
    )))
}

fn fetch_sales(db: &DbConn) -> ApiResult<Vec<SalesRecord>> {
    let conn = db.lock()?;
    let mut stmt = conn.prepare(
        "SELECT uuid, invoice_number, date, customer, item, quantity, product_revenue, total_revenue, order_category, product_line, first_repeat, online_offline FROM salesdata ORDER BY date",
    )?;

    let records = stmt
        .query_map([], |row| {
            Ok(SalesRecord {
                uuid: row.get(0)?,
                invoice_number: row.get(1)?,
                date: row.get(2)?,
                customer: row.get(3)?,
                item: row.get(4)?,
                quantity: row.get(5)?,
                product_revenue: row.get(6)?,
                total_revenue: row.get(7)?,
                order_category: row.get(8)?,
                product_line: row.get(9)?,
                first_repeat: row.get(10)?,
                online_offline: row.get(11)?,
            })
        })?
        .filter_map(|row| row.ok())
        .collect();

    Ok(records)
}
