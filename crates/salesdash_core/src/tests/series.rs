//! Tests for sweeps, comparison series, and the selection cap

use crate::calculator::{ProductionInputs, scenario_results};
use crate::model::{ResultField, ScenarioParameters, sample_scenarios};
use crate::series::{
    COMPARISON_FIELDS, ComparisonSelection, MAX_COMPARED_SCENARIOS, ProductionField,
    ScenarioSweepParameter, SweepParameter, comparison_series, sweep_production, sweep_scenario,
};

#[test]
fn test_efficiency_sweep_monotonic_production() {
    let inputs = ProductionInputs::default();
    let values: Vec<f64> = (0..=10).map(|step| f64::from(step) * 10.0).collect();
    let points = sweep_production(
        &inputs,
        SweepParameter::Efficiency,
        &values,
        ProductionField::EffectiveProduction,
    );

    assert_eq!(points.len(), values.len());
    for pair in points.windows(2) {
        assert!(
            pair[1].1 >= pair[0].1,
            "effective production decreased between {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_sweep_preserves_input_order_and_echoes_values() {
    let inputs = ProductionInputs::default();
    let values = [2600.0, 2000.0, 3200.0, 2400.0];
    let points = sweep_production(
        &inputs,
        SweepParameter::SellingPrice,
        &values,
        ProductionField::AdjustedProfit,
    );

    let swept: Vec<f64> = points.iter().map(|(value, _)| *value).collect();
    assert_eq!(swept, values);
}

#[test]
fn test_sweep_holds_other_parameters_fixed() {
    let inputs = ProductionInputs::default();
    // Sweeping price leaves unit cost untouched
    let points = sweep_production(
        &inputs,
        SweepParameter::SellingPrice,
        &[2000.0, 3000.0],
        ProductionField::UnitCost,
    );
    assert_eq!(points[0].1, points[1].1);
}

#[test]
fn test_scenario_growth_sweep_increases_revenue() {
    let params = ScenarioParameters::default();
    let values = [-5.0, 0.0, 5.0, 10.0, 15.0];
    let points = sweep_scenario(
        &params,
        ScenarioSweepParameter::Growth,
        &values,
        ResultField::Revenue,
    )
    .unwrap();

    for pair in points.windows(2) {
        assert!(pair[1].1 > pair[0].1);
    }
}

#[test]
fn test_comparison_series_field_ordering() {
    let scenarios = sample_scenarios();
    let series = comparison_series(&scenarios).unwrap();

    assert_eq!(series.len(), scenarios.len());
    for (scenario, entry) in scenarios.iter().zip(&series) {
        assert_eq!(entry.label, scenario.name);
        assert_eq!(entry.values.len(), COMPARISON_FIELDS.len());

        let results = scenario_results(&scenario.parameters).unwrap();
        assert_eq!(entry.values[0], results.revenue);
        assert_eq!(entry.values[1], results.cogs);
        assert_eq!(entry.values[2], results.gross_profit);
        assert_eq!(entry.values[3], results.operating_expenses);
        assert_eq!(entry.values[4], results.operating_profit);
    }
}

#[test]
fn test_comparison_series_ignores_stale_cached_results() {
    let mut scenarios = sample_scenarios();
    // Change parameters without recalculating the cached results block
    scenarios[0].parameters.production.volume = 900.0;

    let series = comparison_series(&scenarios).unwrap();
    let fresh = scenario_results(&scenarios[0].parameters).unwrap();

    assert_eq!(series[0].values[0], fresh.revenue);
    assert_ne!(series[0].values[0], scenarios[0].results.revenue);
}

#[test]
fn test_selection_cap_keeps_first_four() {
    let mut selection = ComparisonSelection::new();
    for id in ["1", "2", "3", "4"] {
        assert!(selection.select(id));
    }
    // The fifth selection is ignored, never one of the first four
    assert!(!selection.select("5"));

    assert_eq!(selection.len(), MAX_COMPARED_SCENARIOS);
    assert_eq!(selection.ids(), ["1", "2", "3", "4"]);
    assert!(!selection.contains("5"));

    // Re-selecting an existing id is a no-op, not a drop
    assert!(selection.select("2"));
    assert_eq!(selection.len(), MAX_COMPARED_SCENARIOS);
}

#[test]
fn test_selection_toggle_frees_a_slot() {
    let mut selection = ComparisonSelection::new();
    for id in ["1", "2", "3", "4"] {
        selection.toggle(id);
    }
    assert!(!selection.toggle("5"));

    // Deselecting always works, even at the cap
    assert!(selection.toggle("3"));
    assert!(!selection.contains("3"));
    assert!(selection.toggle("5"));
    assert_eq!(selection.ids(), ["1", "2", "4", "5"]);
}
