//! Type definitions for parameters, scenarios, and derived results

pub mod parameter;
pub mod results;
pub mod scenario;

pub use parameter::{Parameter, Preset, default_parameters, default_presets};
pub use results::{Metric, MetricUnit, ResultField, ScenarioResults};
pub use scenario::{
    MarketConditions, Pricing, ProductMix, Production, Scenario, ScenarioParameters, UnitCosts,
    sample_scenarios,
};
