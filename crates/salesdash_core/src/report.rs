//! Monthly report assembly
//!
//! Produces the structured report object the PDF renderer consumes:
//! formatted metric rows, a per-product-line table, an executive summary
//! paragraph, and the section-inclusion flags. Rendering to a paginated
//! document is external; this module only supplies the object, serialized
//! with the camelCase field names the renderer expects.

use serde::{Deserialize, Serialize};

use crate::format::{format_count, format_currency, format_percentage, format_percentage_change};
use crate::sales::SalesSummary;

/// One formatted metric row in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetric {
    pub name: String,
    pub value: String,
    pub change: String,
}

/// One product-line row in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportProduct {
    pub name: String,
    pub revenue: String,
    pub units: String,
    pub avg_price: String,
}

/// Sections toggled on or off in a generated report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportOptions {
    pub include_graphs: bool,
    pub include_raw_data: bool,
    pub include_executive_summary: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_graphs: true,
            include_raw_data: true,
            include_executive_summary: true,
        }
    }
}

/// The structured report object handed to the PDF renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub month: String,
    pub year: String,
    pub metrics: Vec<ReportMetric>,
    pub products: Vec<ReportProduct>,
    pub executive_summary: String,
    pub include_graphs: bool,
    pub include_raw_data: bool,
    pub include_executive_summary: bool,
}

impl MonthlyReport {
    /// Assemble a report for the given period from a sales summary
    #[must_use]
    pub fn build(month: &str, year: &str, summary: &SalesSummary, options: ReportOptions) -> Self {
        let metrics = summary
            .to_metrics()
            .iter()
            .map(|metric| ReportMetric {
                name: metric.name.clone(),
                value: metric.display_value(),
                change: metric
                    .change
                    .map(|change| format_percentage_change(change, 0))
                    .unwrap_or_default(),
            })
            .collect();

        let products = summary
            .product_lines
            .iter()
            .map(|line| ReportProduct {
                name: line.name.clone(),
                revenue: format_currency(line.revenue, 0),
                units: format_count(line.units),
                avg_price: format_currency(line.average_price(), 0),
            })
            .collect();

        Self {
            month: month.to_string(),
            year: year.to_string(),
            metrics,
            products,
            executive_summary: executive_summary(month, year, summary),
            include_graphs: options.include_graphs,
            include_raw_data: options.include_raw_data,
            include_executive_summary: options.include_executive_summary,
        }
    }
}

fn executive_summary(month: &str, year: &str, summary: &SalesSummary) -> String {
    let gross_margin = if summary.total_revenue == 0.0 {
        0.0
    } else {
        (summary.total_revenue - summary.estimated_cogs) / summary.total_revenue
    };

    let mut text = format!(
        "In {month} {year}, the business recorded {} across {} orders, an average of {} per order.",
        format_currency(summary.total_revenue, 0),
        format_count(summary.total_orders as f64),
        format_currency(summary.average_order_value(), 0),
    );

    if let Some(top) = summary.top_product_line() {
        text.push_str(&format!(
            " {} was the strongest product line at {}.",
            top.name,
            format_currency(top.revenue, 0),
        ));
    }

    text.push_str(&format!(
        " Estimated cost of goods sold was {}, leaving an estimated gross margin of {}.",
        format_currency(summary.estimated_cogs, 0),
        format_percentage(gross_margin, 1),
    ));

    text
}
