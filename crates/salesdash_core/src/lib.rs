//! Business-metrics calculation library
//!
//! This crate provides the pure building blocks behind the sales dashboard:
//! - Bounded input `Parameter`s and saved `Preset` bundles
//! - The metrics calculator, in two variants: a single-product
//!   configuration and a multi-product-line scenario
//! - Sensitivity sweeps and scenario-comparison series for charting
//! - US-locale currency/percentage formatting and the unified
//!   numeric-string parser
//! - Sales-row summarization and monthly-report assembly
//!
//! Everything here is synchronous and side-effect free. Persistence and
//! transport live in `salesdash_server`.
//!
//! # Quick calculation
//!
//! ```
//! use salesdash_core::calculator::scenario_results;
//! use salesdash_core::model::ScenarioParameters;
//!
//! let results = scenario_results(&ScenarioParameters::default()).unwrap();
//! assert!(results.revenue > 0.0);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod calculator;
pub mod error;
pub mod format;
pub mod report;
pub mod sales;
pub mod series;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use calculator::{
    ProductionInputs, ProductionMetrics, production_metrics, scenario_results,
};
pub use error::CalcError;
pub use model::{
    Metric, MetricUnit, Parameter, Preset, Scenario, ScenarioParameters, ScenarioResults,
};
