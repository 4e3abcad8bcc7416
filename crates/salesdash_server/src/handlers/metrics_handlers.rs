use axum::Json;

use salesdash_core::calculator::{ProductionInputs, production_metrics};
use salesdash_core::series::sweep_production;

use crate::error::ApiResult;
use crate::models::{MetricsRequest, MetricsResponse, SweepRequest, SweepResponse};
use crate::validation;

/// Compute the single-configuration metric list for a posted parameter set
pub async fn calculate_metrics(
    Json(req): Json<MetricsRequest>,
) -> ApiResult<Json<MetricsResponse>> {
    validation::validate_parameters(&req.parameters)?;

    let inputs = ProductionInputs::from_parameters(&req.parameters);
    let computed = production_metrics(&inputs);

    Ok(Json(MetricsResponse {
        inputs,
        metrics: computed.metric_list(),
    }))
}

/// Run a sensitivity sweep over one parameter, all others held fixed
pub async fn sweep_metrics(Json(req): Json<SweepRequest>) -> ApiResult<Json<SweepResponse>> {
    validation::validate_parameters(&req.parameters)?;
    validation::validate_sweep_values(&req.values)?;

    let inputs = ProductionInputs::from_parameters(&req.parameters);
    let points = sweep_production(&inputs, req.parameter, &req.values, req.field);

    Ok(Json(SweepResponse {
        parameter: req.parameter,
        field: req.field,
        points,
    }))
}
