//! Derived financial results and display metrics
//!
//! Results are always derived from scenario parameters by the calculator
//! and never edited directly; any parameter change requires a recompute.

use serde::{Deserialize, Serialize};

use crate::format::{format_count, format_currency, format_percentage};

/// Derived financial results for a scenario.
///
/// `revenue`, the profits, and the margins are market-adjusted; `cogs` and
/// `operating_expenses` are not. Margins are fractions (0.25 = 25%); a
/// zero-revenue scenario reports 0.0 margins rather than NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResults {
    pub revenue: f64,
    pub cogs: f64,
    pub gross_profit: f64,
    pub gross_margin: f64,
    pub operating_expenses: f64,
    pub operating_profit: f64,
    pub operating_margin: f64,
}

/// Selector for one field of [`ScenarioResults`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultField {
    Revenue,
    Cogs,
    GrossProfit,
    GrossMargin,
    OperatingExpenses,
    OperatingProfit,
    OperatingMargin,
}

impl ResultField {
    /// Display label for chart axes and legends
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Cogs => "COGS",
            Self::GrossProfit => "Gross Profit",
            Self::GrossMargin => "Gross Margin",
            Self::OperatingExpenses => "Operating Expenses",
            Self::OperatingProfit => "Operating Profit",
            Self::OperatingMargin => "Operating Margin",
        }
    }

    /// Extract this field from a results record
    #[must_use]
    pub fn of(&self, results: &ScenarioResults) -> f64 {
        match self {
            Self::Revenue => results.revenue,
            Self::Cogs => results.cogs,
            Self::GrossProfit => results.gross_profit,
            Self::GrossMargin => results.gross_margin,
            Self::OperatingExpenses => results.operating_expenses,
            Self::OperatingProfit => results.operating_profit,
            Self::OperatingMargin => results.operating_margin,
        }
    }
}

/// Unit kind for a display metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricUnit {
    Currency,
    Percentage,
    Count,
}

/// A named derived value ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: String,
    pub name: String,
    pub category: String,
    pub value: f64,
    pub unit: MetricUnit,
    pub description: String,
    /// Fractional change versus the prior period, when one is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
}

impl Metric {
    /// Render the value using the unit's formatter
    #[must_use]
    pub fn display_value(&self) -> String {
        match self.unit {
            MetricUnit::Currency => format_currency(self.value, 0),
            MetricUnit::Percentage => format_percentage(self.value, 1),
            MetricUnit::Count => format_count(self.value),
        }
    }
}
