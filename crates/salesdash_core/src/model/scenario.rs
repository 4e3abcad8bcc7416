//! Scenarios: named parameter bundles with derived financial results
//!
//! A scenario owns its parameters; its `results` block is a cache of the
//! calculator output and must be recomputed whenever any parameter changes.
//! Raw product-mix shares need not sum to 100 — the calculator normalizes
//! them, preserving relative proportions.

use serde::{Deserialize, Serialize};

use super::results::ScenarioResults;
use crate::calculator::scenario_results;
use crate::error::CalcError;

/// Product-mix shares per product line, as raw whole-number percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductMix {
    pub kx: f64,
    pub dx: f64,
    pub ex: f64,
}

impl ProductMix {
    /// Sum of the raw shares
    #[must_use]
    pub fn total(&self) -> f64 {
        self.kx + self.dx + self.ex
    }
}

/// Selling price per unit for each product line ($)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub kx: f64,
    pub dx: f64,
    pub ex: f64,
}

/// Per-unit cost rates by category ($), applied uniformly across all lines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitCosts {
    pub materials: f64,
    pub labor: f64,
    pub overhead: f64,
}

impl UnitCosts {
    /// Combined cost per unit across all categories
    #[must_use]
    pub fn per_unit_total(&self) -> f64 {
        self.materials + self.labor + self.overhead
    }
}

/// Production volume (units/month) and efficiency (whole-number percent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Production {
    pub volume: f64,
    pub efficiency: f64,
}

/// Market growth and competition intensity, as whole-number percents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketConditions {
    pub growth: f64,
    pub competition: f64,
}

/// The full parameter bundle for a multi-product-line scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    pub product_mix: ProductMix,
    pub pricing: Pricing,
    pub costs: UnitCosts,
    pub production: Production,
    pub market: MarketConditions,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            product_mix: ProductMix {
                kx: 40.0,
                dx: 35.0,
                ex: 25.0,
            },
            pricing: Pricing {
                kx: 1200.0,
                dx: 1800.0,
                ex: 950.0,
            },
            costs: UnitCosts {
                materials: 450.0,
                labor: 350.0,
                overhead: 250.0,
            },
            production: Production {
                volume: 500.0,
                efficiency: 85.0,
            },
            market: MarketConditions {
                growth: 5.0,
                competition: 3.0,
            },
        }
    }
}

/// A named, described parameter bundle plus its derived results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub parameters: ScenarioParameters,
    pub results: ScenarioResults,
}

impl Scenario {
    /// Create a scenario and compute its results from the given parameters
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: ScenarioParameters,
    ) -> Result<Self, CalcError> {
        let results = scenario_results(&parameters)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            parameters,
            results,
        })
    }

    /// Recompute `results` from the current parameters
    pub fn recalculate(&mut self) -> Result<(), CalcError> {
        self.results = scenario_results(&self.parameters)?;
        Ok(())
    }

    /// Copy this scenario under a new id, with " (Copy)" appended to the name
    pub fn duplicate(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: format!("{} (Copy)", self.name),
            ..self.clone()
        }
    }
}

/// The built-in scenario set, used to seed an empty store and as the
/// fallback when the store is unreachable.
#[must_use]
pub fn sample_scenarios() -> Vec<Scenario> {
    let base = ScenarioParameters::default();

    let growth = ScenarioParameters {
        production: Production {
            volume: 650.0,
            efficiency: 82.0,
        },
        market: MarketConditions {
            growth: 8.0,
            competition: 4.0,
        },
        ..base
    };

    let premium = ScenarioParameters {
        product_mix: ProductMix {
            kx: 30.0,
            dx: 50.0,
            ex: 20.0,
        },
        pricing: Pricing {
            kx: 1300.0,
            dx: 2000.0,
            ex: 1050.0,
        },
        ..base
    };

    let cost_reduction = ScenarioParameters {
        costs: UnitCosts {
            materials: 400.0,
            labor: 320.0,
            overhead: 230.0,
        },
        production: Production {
            volume: 520.0,
            efficiency: 90.0,
        },
        ..base
    };

    [
        ("1", "Current State", "Baseline scenario using current business parameters", base),
        (
            "2",
            "Growth Strategy",
            "Increased production volume with higher market growth",
            growth,
        ),
        (
            "3",
            "Premium Pricing",
            "Higher prices with focus on DX product line",
            premium,
        ),
        (
            "4",
            "Cost Reduction",
            "Lower material and labor costs with improved efficiency",
            cost_reduction,
        ),
    ]
    .into_iter()
    .map(|(id, name, description, parameters)| {
        // The built-in parameter sets all carry a positive product mix
        Scenario::new(id, name, description, parameters)
            .expect("sample scenario parameters are valid")
    })
    .collect()
}
