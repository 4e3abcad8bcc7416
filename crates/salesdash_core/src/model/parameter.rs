//! Adjustable input parameters and saved presets
//!
//! A [`Parameter`] is a bounded numeric input driving the single-product
//! calculator. Parameters are mutated in place by the UI and persisted only
//! as part of a [`Preset`]; a preset is immutable once saved (re-saving
//! creates a new one).

use serde::{Deserialize, Serialize};

/// A bounded numeric input driving the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: String,
    pub description: String,
}

impl Parameter {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        value: f64,
        min: f64,
        max: f64,
        step: f64,
        unit: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: value.clamp(min, max),
            min,
            max,
            step,
            unit: unit.into(),
            description: description.into(),
        }
    }

    /// Set the value, clamped into `[min, max]`
    pub fn set(&mut self, value: f64) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Whether the stored value respects the `min <= value <= max` invariant
    #[must_use]
    pub fn in_range(&self) -> bool {
        self.value >= self.min && self.value <= self.max
    }
}

/// A saved, reusable parameter bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub parameters: Vec<Parameter>,
}

/// The five production sliders with their default values
#[must_use]
pub fn default_parameters() -> Vec<Parameter> {
    vec![
        Parameter::new(
            "p1",
            "Production Efficiency",
            85.0,
            50.0,
            100.0,
            1.0,
            "%",
            "Overall efficiency of production processes",
        ),
        Parameter::new(
            "p2",
            "Raw Material Cost",
            450.0,
            300.0,
            800.0,
            10.0,
            "$/unit",
            "Cost of raw materials per unit",
        ),
        Parameter::new(
            "p3",
            "Labor Hours",
            12.0,
            6.0,
            24.0,
            0.5,
            "hours/unit",
            "Labor hours required per unit",
        ),
        Parameter::new(
            "p4",
            "Selling Price",
            2500.0,
            1500.0,
            4000.0,
            50.0,
            "$/unit",
            "Average selling price per unit",
        ),
        Parameter::new(
            "p5",
            "Monthly Production",
            500.0,
            100.0,
            1000.0,
            25.0,
            "units",
            "Number of units produced per month",
        ),
    ]
}

/// The built-in presets offered before any have been saved
#[must_use]
pub fn default_presets() -> Vec<Preset> {
    vec![
        preset("preset1", "High Efficiency", [95.0, 500.0, 10.0, 2600.0, 550.0]),
        preset("preset2", "Cost Reduction", [90.0, 380.0, 9.0, 2400.0, 525.0]),
        preset("preset3", "Premium Product", [88.0, 600.0, 15.0, 3200.0, 400.0]),
    ]
}

fn preset(id: &str, name: &str, values: [f64; 5]) -> Preset {
    let mut parameters = default_parameters();
    for (parameter, value) in parameters.iter_mut().zip(values) {
        parameter.set(value);
    }
    Preset {
        id: id.to_string(),
        name: name.to_string(),
        parameters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clamps_to_range() {
        let mut parameter = default_parameters().remove(0);
        parameter.set(120.0);
        assert_eq!(parameter.value, 100.0);
        parameter.set(10.0);
        assert_eq!(parameter.value, 50.0);
        parameter.set(85.0);
        assert_eq!(parameter.value, 85.0);
        assert!(parameter.in_range());
    }

    #[test]
    fn test_default_presets_respect_ranges() {
        for preset in default_presets() {
            assert_eq!(preset.parameters.len(), 5);
            for parameter in &preset.parameters {
                assert!(
                    parameter.in_range(),
                    "{} out of range in {}",
                    parameter.name,
                    preset.name
                );
            }
        }
    }
}
