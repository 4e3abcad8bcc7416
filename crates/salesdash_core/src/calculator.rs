//! The scenario metrics calculator
//!
//! Pure functions from parameter sets to derived financial metrics, in two
//! variants: a single-product configuration driven by the slider
//! [`Parameter`] list, and a multi-product-line scenario driven by
//! [`ScenarioParameters`]. No I/O and no shared state; callers own when to
//! recompute.
//!
//! Percentage parameters arrive as whole numbers (`85` means 85%) and are
//! divided by 100 exactly once, here. Every division that could see a zero
//! denominator goes through [`safe_ratio`], so margins and ROI report the
//! 0.0 sentinel instead of propagating NaN or infinity into display code.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::model::{Metric, MetricUnit, Parameter, ProductMix, ScenarioParameters, ScenarioResults};

/// Hourly labor rate applied to labor-hours ($/hour)
pub const LABOR_RATE_PER_HOUR: f64 = 35.0;
/// Fixed overhead allocated to each unit ($)
pub const FIXED_OVERHEAD_PER_UNIT: f64 = 250.0;
/// Variable operating expenses as a share of revenue
pub const OPEX_REVENUE_RATIO: f64 = 0.20;
/// Fixed monthly operating expenses ($)
pub const FIXED_OPERATING_EXPENSES: f64 = 100_000.0;

/// Divide, reporting 0.0 when the denominator is zero
pub(crate) fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Fractional change from `previous` to `current` (zero previous reports 0.0)
#[must_use]
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    safe_ratio(current - previous, previous)
}

// ============================================================================
// Variant A: single-product configuration
// ============================================================================

/// Inputs for the single-product configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionInputs {
    /// Production efficiency, whole-number percent
    pub efficiency: f64,
    /// Raw material cost, $/unit
    pub material_cost: f64,
    /// Labor hours per unit
    pub labor_hours: f64,
    /// Selling price, $/unit
    pub selling_price: f64,
    /// Units produced per month
    pub monthly_production: f64,
}

impl Default for ProductionInputs {
    fn default() -> Self {
        Self {
            efficiency: 85.0,
            material_cost: 450.0,
            labor_hours: 12.0,
            selling_price: 2500.0,
            monthly_production: 500.0,
        }
    }
}

impl ProductionInputs {
    /// Build inputs from a parameter list, looked up by display name.
    /// Missing parameters fall back to the defaults.
    #[must_use]
    pub fn from_parameters(parameters: &[Parameter]) -> Self {
        let defaults = Self::default();
        let lookup = |name: &str, fallback: f64| {
            parameters
                .iter()
                .find(|p| p.name == name)
                .map_or(fallback, |p| p.value)
        };
        Self {
            efficiency: lookup("Production Efficiency", defaults.efficiency),
            material_cost: lookup("Raw Material Cost", defaults.material_cost),
            labor_hours: lookup("Labor Hours", defaults.labor_hours),
            selling_price: lookup("Selling Price", defaults.selling_price),
            monthly_production: lookup("Monthly Production", defaults.monthly_production),
        }
    }
}

/// Derived metrics for the single-product configuration.
///
/// The `monthly_*` fields are unadjusted; `effective_production` and the
/// `adjusted_*` fields account for efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionMetrics {
    pub unit_cost: f64,
    pub gross_margin: f64,
    pub gross_margin_pct: f64,
    pub monthly_revenue: f64,
    pub monthly_cost: f64,
    pub monthly_profit: f64,
    pub roi: f64,
    pub effective_production: f64,
    pub adjusted_revenue: f64,
    pub adjusted_profit: f64,
}

/// Compute the single-product configuration metrics
#[must_use]
pub fn production_metrics(inputs: &ProductionInputs) -> ProductionMetrics {
    let labor_cost = inputs.labor_hours * LABOR_RATE_PER_HOUR;
    let unit_cost = inputs.material_cost + labor_cost + FIXED_OVERHEAD_PER_UNIT;
    let gross_margin = inputs.selling_price - unit_cost;
    let gross_margin_pct = safe_ratio(gross_margin, inputs.selling_price);

    let monthly_revenue = inputs.selling_price * inputs.monthly_production;
    let monthly_cost = unit_cost * inputs.monthly_production;
    let monthly_profit = monthly_revenue - monthly_cost;
    let roi = safe_ratio(monthly_profit, monthly_cost);

    let effective_production = inputs.monthly_production * (inputs.efficiency / 100.0);
    let adjusted_revenue = inputs.selling_price * effective_production;
    let adjusted_profit = adjusted_revenue - unit_cost * effective_production;

    ProductionMetrics {
        unit_cost,
        gross_margin,
        gross_margin_pct,
        monthly_revenue,
        monthly_cost,
        monthly_profit,
        roi,
        effective_production,
        adjusted_revenue,
        adjusted_profit,
    }
}

impl ProductionMetrics {
    /// The display list shown on the parameter-adjustment page
    #[must_use]
    pub fn metric_list(&self) -> Vec<Metric> {
        let metric = |id: &str, name: &str, category: &str, value, unit, description: &str| Metric {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            value,
            unit,
            description: description.to_string(),
            change: None,
        };
        vec![
            metric(
                "m1",
                "Unit Cost",
                "Unit Metrics",
                self.unit_cost,
                MetricUnit::Currency,
                "Total cost to produce one unit",
            ),
            metric(
                "m2",
                "Gross Margin",
                "Unit Metrics",
                self.gross_margin,
                MetricUnit::Currency,
                "Profit per unit before operating expenses",
            ),
            metric(
                "m3",
                "Gross Margin %",
                "Unit Metrics",
                self.gross_margin_pct,
                MetricUnit::Percentage,
                "Gross margin as a percentage of selling price",
            ),
            metric(
                "m4",
                "Monthly Revenue",
                "Business Performance",
                self.adjusted_revenue,
                MetricUnit::Currency,
                "Total monthly revenue adjusted for efficiency",
            ),
            metric(
                "m5",
                "Monthly Profit",
                "Business Performance",
                self.adjusted_profit,
                MetricUnit::Currency,
                "Total monthly profit adjusted for efficiency",
            ),
            metric(
                "m6",
                "ROI",
                "Business Performance",
                self.roi,
                MetricUnit::Percentage,
                "Return on investment (monthly profit / monthly cost)",
            ),
            metric(
                "m7",
                "Effective Production",
                "Business Performance",
                self.effective_production,
                MetricUnit::Count,
                "Actual production after efficiency adjustment",
            ),
        ]
    }
}

// ============================================================================
// Variant B: multi-product-line scenario
// ============================================================================

/// Normalize product-mix shares so they sum to exactly 100, preserving
/// relative proportions. A zero raw sum has no normalization and is an
/// input error.
pub fn normalize_mix(mix: &ProductMix) -> Result<ProductMix, CalcError> {
    let raw_total = mix.total();
    if raw_total == 0.0 {
        return Err(CalcError::ZeroProductMix);
    }
    Ok(ProductMix {
        kx: mix.kx / raw_total * 100.0,
        dx: mix.dx / raw_total * 100.0,
        ex: mix.ex / raw_total * 100.0,
    })
}

/// Compute the derived results for a multi-product-line scenario.
///
/// The reported record uses market-adjusted revenue, profits, and margins
/// (growth scales revenue; competition erodes operating profit), while COGS
/// and operating expenses stay unadjusted.
pub fn scenario_results(params: &ScenarioParameters) -> Result<ScenarioResults, CalcError> {
    let mix = normalize_mix(&params.product_mix)?;

    let effective_volume = params.production.volume * (params.production.efficiency / 100.0);
    let units_kx = effective_volume * (mix.kx / 100.0);
    let units_dx = effective_volume * (mix.dx / 100.0);
    let units_ex = effective_volume * (mix.ex / 100.0);

    let revenue = units_kx * params.pricing.kx
        + units_dx * params.pricing.dx
        + units_ex * params.pricing.ex;

    let total_units = units_kx + units_dx + units_ex;
    let cogs = params.costs.per_unit_total() * total_units;

    let gross_profit = revenue - cogs;
    let operating_expenses = revenue * OPEX_REVENUE_RATIO + FIXED_OPERATING_EXPENSES;
    let operating_profit = gross_profit - operating_expenses;

    let adjusted_revenue = revenue * (1.0 + params.market.growth / 100.0);
    let adjusted_operating_profit = operating_profit * (1.0 - params.market.competition / 100.0);

    Ok(ScenarioResults {
        revenue: adjusted_revenue,
        cogs,
        gross_profit: adjusted_revenue - cogs,
        gross_margin: safe_ratio(adjusted_revenue - cogs, adjusted_revenue),
        operating_expenses,
        operating_profit: adjusted_operating_profit,
        operating_margin: safe_ratio(adjusted_operating_profit, adjusted_revenue),
    })
}
