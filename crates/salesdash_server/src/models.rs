use serde::{Deserialize, Serialize};

use salesdash_core::calculator::ProductionInputs;
use salesdash_core::model::{Metric, Parameter, ScenarioParameters, ScenarioResults};
use salesdash_core::report::ReportOptions;
use salesdash_core::sales::SalesSummary;
use salesdash_core::series::{ComparisonSeries, ProductionField, SweepParameter};

// ============================================================================
// Scenario Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedScenario {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub parameters: ScenarioParameters,
    /// Always recomputed from `parameters` at response time, never stored
    pub results: ScenarioResults,
    pub created_at: String,
    pub updated_at: String,
}

/// List view mirroring the scenario table columns
#[derive(Debug, Serialize, Deserialize)]
pub struct ScenarioListItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub revenue: f64,
    pub gross_margin: f64,
    pub operating_margin: f64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateScenarioRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: ScenarioParameters,
}

#[derive(Debug, Deserialize)]
pub struct UpdateScenarioRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parameters: Option<ScenarioParameters>,
}

#[derive(Debug, Deserialize)]
pub struct CompareScenariosRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    /// Field labels, in the fixed chart ordering
    pub labels: Vec<String>,
    pub series: Vec<ComparisonSeries>,
}

// ============================================================================
// Preset Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedPreset {
    pub id: String,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePresetRequest {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

// ============================================================================
// Metrics Types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct MetricsRequest {
    /// Empty list falls back to the default parameter set
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub inputs: ProductionInputs,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Deserialize)]
pub struct SweepRequest {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub parameter: SweepParameter,
    pub values: Vec<f64>,
    pub field: ProductionField,
}

#[derive(Debug, Serialize)]
pub struct SweepResponse {
    pub parameter: SweepParameter,
    pub field: ProductionField,
    /// `(swept_value, field_value)` pairs in request order
    pub points: Vec<(f64, f64)>,
}

// ============================================================================
// Sales / Report / Chat Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SalesSummaryResponse {
    pub summary: SalesSummary,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub month: String,
    pub year: String,
    #[serde(flatten)]
    pub options: ReportOptions,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub citations: Vec<String>,
}
