//! Tests for both calculator variants
//!
//! The default-parameter expectations are hand-derived regression fixtures:
//! if one of these fails, the formulas changed.

use crate::calculator::{
    ProductionInputs, normalize_mix, percentage_change, production_metrics, scenario_results,
};
use crate::error::CalcError;
use crate::model::{
    MetricUnit, Pricing, ProductMix, ScenarioParameters, default_parameters, sample_scenarios,
};

const TOLERANCE: f64 = 1e-6;

fn assert_close(actual: f64, expected: f64, label: &str) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{label}: expected {expected}, got {actual}"
    );
}

#[test]
fn test_production_metrics_default_fixture() {
    let metrics = production_metrics(&ProductionInputs::default());

    // 450 materials + 12h * $35 labor + 250 overhead
    assert_close(metrics.unit_cost, 1120.0, "unit_cost");
    assert_close(metrics.gross_margin, 1380.0, "gross_margin");
    assert_close(metrics.gross_margin_pct, 0.552, "gross_margin_pct");
    assert_close(metrics.monthly_revenue, 1_250_000.0, "monthly_revenue");
    assert_close(metrics.monthly_cost, 560_000.0, "monthly_cost");
    assert_close(metrics.monthly_profit, 690_000.0, "monthly_profit");
    assert_close(metrics.roi, 690_000.0 / 560_000.0, "roi");
    assert_close(metrics.effective_production, 425.0, "effective_production");
    assert_close(metrics.adjusted_revenue, 1_062_500.0, "adjusted_revenue");
    assert_close(metrics.adjusted_profit, 586_500.0, "adjusted_profit");
}

#[test]
fn test_scenario_results_default_fixture() {
    let results = scenario_results(&ScenarioParameters::default()).unwrap();

    // Unadjusted revenue 572,687.50 grown 5%; COGS 1050/unit * 425 units
    assert_close(results.revenue, 601_321.875, "revenue");
    assert_close(results.cogs, 446_250.0, "cogs");
    assert_close(results.gross_profit, 155_071.875, "gross_profit");
    assert_close(results.operating_expenses, 214_537.5, "operating_expenses");
    // Unadjusted operating profit -88,100 eroded by 3% competition
    assert_close(results.operating_profit, -85_457.0, "operating_profit");

    assert!((results.gross_margin - 0.2579).abs() < 1e-4);
    assert!((results.operating_margin - (-0.1421)).abs() < 1e-4);
}

#[test]
fn test_gross_margin_identity() {
    // gross_margin must equal (revenue - cogs) / revenue for every record
    for efficiency in [50.0, 72.0, 85.0, 100.0] {
        let mut params = ScenarioParameters::default();
        params.production.efficiency = efficiency;
        let results = scenario_results(&params).unwrap();
        assert_eq!(
            results.gross_margin,
            (results.revenue - results.cogs) / results.revenue,
        );
    }
}

#[test]
fn test_mix_normalization_preserves_proportions() {
    let raw = ProductMix {
        kx: 50.0,
        dx: 30.0,
        ex: 40.0,
    };
    let normalized = normalize_mix(&raw).unwrap();

    assert!((normalized.total() - 100.0).abs() < 1e-9);
    assert!((normalized.kx / normalized.ex - 50.0 / 40.0).abs() < 1e-9);
    assert!((normalized.dx / normalized.ex - 30.0 / 40.0).abs() < 1e-9);
}

#[test]
fn test_non_summing_mix_matches_normalized_equivalent() {
    // Scaling every raw share by the same factor must not change results
    let mut scaled = ScenarioParameters::default();
    scaled.product_mix = ProductMix {
        kx: 80.0,
        dx: 70.0,
        ex: 50.0,
    };
    let baseline = scenario_results(&ScenarioParameters::default()).unwrap();
    let results = scenario_results(&scaled).unwrap();

    assert_close(results.revenue, baseline.revenue, "revenue");
    assert_close(results.cogs, baseline.cogs, "cogs");
}

#[test]
fn test_zero_mix_is_rejected() {
    let mut params = ScenarioParameters::default();
    params.product_mix = ProductMix {
        kx: 0.0,
        dx: 0.0,
        ex: 0.0,
    };
    assert_eq!(
        scenario_results(&params).unwrap_err(),
        CalcError::ZeroProductMix
    );
}

#[test]
fn test_zero_revenue_reports_zero_margins() {
    let mut params = ScenarioParameters::default();
    params.pricing = Pricing {
        kx: 0.0,
        dx: 0.0,
        ex: 0.0,
    };
    let results = scenario_results(&params).unwrap();

    assert_eq!(results.revenue, 0.0);
    assert_eq!(results.gross_margin, 0.0);
    assert_eq!(results.operating_margin, 0.0);
    assert!(results.gross_profit.is_finite());
    assert!(results.operating_profit.is_finite());
}

#[test]
fn test_zero_cost_reports_zero_roi() {
    let inputs = ProductionInputs {
        monthly_production: 0.0,
        ..ProductionInputs::default()
    };
    let metrics = production_metrics(&inputs);
    assert_eq!(metrics.monthly_cost, 0.0);
    assert_eq!(metrics.roi, 0.0);
}

#[test]
fn test_whole_number_percent_convention() {
    let mut params = ScenarioParameters::default();
    params.production.efficiency = 50.0;
    let halved = scenario_results(&params).unwrap();
    params.production.efficiency = 100.0;
    let full = scenario_results(&params).unwrap();

    assert_close(halved.revenue * 2.0, full.revenue, "revenue scales with efficiency");
}

#[test]
fn test_inputs_from_parameters() {
    let mut parameters = default_parameters();
    assert_eq!(
        ProductionInputs::from_parameters(&parameters),
        ProductionInputs::default()
    );

    parameters[3].set(3000.0); // Selling Price
    let inputs = ProductionInputs::from_parameters(&parameters);
    assert_eq!(inputs.selling_price, 3000.0);

    // Missing parameters fall back to defaults
    let inputs = ProductionInputs::from_parameters(&[]);
    assert_eq!(inputs, ProductionInputs::default());
}

#[test]
fn test_metric_list_shape() {
    let metrics = production_metrics(&ProductionInputs::default()).metric_list();

    assert_eq!(metrics.len(), 7);
    assert_eq!(metrics[0].name, "Unit Cost");
    assert_eq!(metrics[0].unit, MetricUnit::Currency);
    assert_eq!(metrics[5].name, "ROI");
    assert_eq!(metrics[5].unit, MetricUnit::Percentage);
    assert_eq!(metrics[6].unit, MetricUnit::Count);
    assert!(metrics.iter().all(|metric| metric.change.is_none()));
}

#[test]
fn test_scenario_recalculate_refreshes_results() {
    let mut scenario = sample_scenarios().remove(0);
    let stale = scenario.results;

    scenario.parameters.production.volume = 900.0;
    scenario.recalculate().unwrap();

    assert_ne!(scenario.results.revenue, stale.revenue);
    assert_eq!(
        scenario.results,
        scenario_results(&scenario.parameters).unwrap()
    );
}

#[test]
fn test_scenario_duplicate_appends_copy() {
    let scenario = sample_scenarios().remove(2);
    let copy = scenario.duplicate("9");

    assert_eq!(copy.id, "9");
    assert_eq!(copy.name, "Premium Pricing (Copy)");
    assert_eq!(copy.parameters, scenario.parameters);
    assert_eq!(copy.results, scenario.results);
}

#[test]
fn test_percentage_change() {
    assert!((percentage_change(110.0, 100.0) - 0.1).abs() < TOLERANCE);
    assert!((percentage_change(90.0, 100.0) + 0.1).abs() < TOLERANCE);
    assert_eq!(percentage_change(42.0, 0.0), 0.0);
}
