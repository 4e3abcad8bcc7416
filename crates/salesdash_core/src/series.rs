//! Sensitivity sweeps and scenario-comparison series
//!
//! Sweeps hold every parameter fixed except one, recompute the metrics at
//! each swept value, and return `(swept_value, field_value)` pairs in input
//! order. Comparison series compute results independently per scenario; the
//! field ordering is a chart contract, not derived. The comparison cap
//! belongs to [`ComparisonSelection`] at the boundary — the builders
//! themselves accept any number of series.

use serde::{Deserialize, Serialize};

use crate::calculator::{
    ProductionInputs, ProductionMetrics, production_metrics, scenario_results,
};
use crate::error::CalcError;
use crate::model::{ResultField, Scenario, ScenarioParameters};

/// Upper bound on scenarios compared side by side
pub const MAX_COMPARED_SCENARIOS: usize = 4;

/// Field ordering for comparison charts
pub const COMPARISON_FIELDS: [ResultField; 5] = [
    ResultField::Revenue,
    ResultField::Cogs,
    ResultField::GrossProfit,
    ResultField::OperatingExpenses,
    ResultField::OperatingProfit,
];

// ============================================================================
// Sweeps
// ============================================================================

/// Parameter swept in single-product sensitivity analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    Efficiency,
    MaterialCost,
    LaborHours,
    SellingPrice,
    MonthlyProduction,
}

/// Field reported from a single-product sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionField {
    UnitCost,
    GrossMargin,
    GrossMarginPct,
    MonthlyRevenue,
    MonthlyProfit,
    Roi,
    EffectiveProduction,
    AdjustedRevenue,
    AdjustedProfit,
}

impl ProductionField {
    /// Extract this field from a computed metrics record
    #[must_use]
    pub fn of(&self, metrics: &ProductionMetrics) -> f64 {
        match self {
            Self::UnitCost => metrics.unit_cost,
            Self::GrossMargin => metrics.gross_margin,
            Self::GrossMarginPct => metrics.gross_margin_pct,
            Self::MonthlyRevenue => metrics.monthly_revenue,
            Self::MonthlyProfit => metrics.monthly_profit,
            Self::Roi => metrics.roi,
            Self::EffectiveProduction => metrics.effective_production,
            Self::AdjustedRevenue => metrics.adjusted_revenue,
            Self::AdjustedProfit => metrics.adjusted_profit,
        }
    }
}

/// Sweep one production parameter across `values`, holding the others fixed
#[must_use]
pub fn sweep_production(
    inputs: &ProductionInputs,
    parameter: SweepParameter,
    values: &[f64],
    field: ProductionField,
) -> Vec<(f64, f64)> {
    values
        .iter()
        .map(|&value| {
            let mut point = *inputs;
            match parameter {
                SweepParameter::Efficiency => point.efficiency = value,
                SweepParameter::MaterialCost => point.material_cost = value,
                SweepParameter::LaborHours => point.labor_hours = value,
                SweepParameter::SellingPrice => point.selling_price = value,
                SweepParameter::MonthlyProduction => point.monthly_production = value,
            }
            (value, field.of(&production_metrics(&point)))
        })
        .collect()
}

/// Parameter swept in scenario sensitivity analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioSweepParameter {
    Volume,
    Efficiency,
    Growth,
    Competition,
    MaterialsCost,
    LaborCost,
    OverheadCost,
}

/// Sweep one scenario parameter across `values`, holding the others fixed
pub fn sweep_scenario(
    params: &ScenarioParameters,
    parameter: ScenarioSweepParameter,
    values: &[f64],
    field: ResultField,
) -> Result<Vec<(f64, f64)>, CalcError> {
    values
        .iter()
        .map(|&value| {
            let mut point = *params;
            match parameter {
                ScenarioSweepParameter::Volume => point.production.volume = value,
                ScenarioSweepParameter::Efficiency => point.production.efficiency = value,
                ScenarioSweepParameter::Growth => point.market.growth = value,
                ScenarioSweepParameter::Competition => point.market.competition = value,
                ScenarioSweepParameter::MaterialsCost => point.costs.materials = value,
                ScenarioSweepParameter::LaborCost => point.costs.labor = value,
                ScenarioSweepParameter::OverheadCost => point.costs.overhead = value,
            }
            scenario_results(&point).map(|results| (value, field.of(&results)))
        })
        .collect()
}

// ============================================================================
// Comparison
// ============================================================================

/// One labeled series for the comparison chart, ordered by
/// [`COMPARISON_FIELDS`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// Build one series per scenario, each recomputed from its own parameters
/// so a stale cached results block can never leak into the chart.
pub fn comparison_series(scenarios: &[Scenario]) -> Result<Vec<ComparisonSeries>, CalcError> {
    scenarios
        .iter()
        .map(|scenario| {
            let results = scenario_results(&scenario.parameters)?;
            Ok(ComparisonSeries {
                label: scenario.name.clone(),
                values: COMPARISON_FIELDS
                    .iter()
                    .map(|field| field.of(&results))
                    .collect(),
            })
        })
        .collect()
}

/// Selection of scenario ids for side-by-side comparison, capped at
/// [`MAX_COMPARED_SCENARIOS`]. Selections past the cap are ignored, not an
/// error; ids already selected always stay selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSelection {
    ids: Vec<String>,
}

impl ComparisonSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an id if absent and there is room; returns whether it is selected
    pub fn select(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return true;
        }
        if self.ids.len() < MAX_COMPARED_SCENARIOS {
            self.ids.push(id.to_string());
            return true;
        }
        false
    }

    /// Toggle membership; returns whether the selection changed
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(position) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(position);
            true
        } else if self.ids.len() < MAX_COMPARED_SCENARIOS {
            self.ids.push(id.to_string());
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    /// Selected ids in selection order
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
