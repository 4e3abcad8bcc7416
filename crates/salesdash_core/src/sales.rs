//! Sales-row summarization
//!
//! Maps raw rows from the sales store into aggregate figures and the
//! categorized metric list shown on the metrics page. Rows arrive with
//! string-typed money and quantity columns; every parse goes through
//! [`parse_amount`](crate::format::parse_amount), so a malformed cell
//! contributes 0.0 instead of poisoning the totals.
//!
//! Prior-period baselines are fixed factors of the current figures until
//! historical rows are stored alongside current ones.

use serde::{Deserialize, Serialize};

use crate::calculator::{percentage_change, safe_ratio};
use crate::format::parse_amount;
use crate::model::{Metric, MetricUnit};

/// Assumed COGS share of revenue when cost rows are absent
pub const ESTIMATED_COGS_RATIO: f64 = 0.6;

const PRIOR_REVENUE_FACTOR: f64 = 0.9;
const PRIOR_ORDERS_FACTOR: f64 = 0.92;
const PRIOR_COGS_RATIO: f64 = 0.62;
const PRIOR_LINE_REVENUE_FACTOR: f64 = 0.9;

/// A raw sales row, in the store's column naming
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "UUID")]
    pub uuid: String,
    #[serde(rename = "Invoice Number")]
    pub invoice_number: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Customer")]
    pub customer: String,
    #[serde(rename = "Item")]
    pub item: String,
    #[serde(rename = "Quantity")]
    pub quantity: String,
    #[serde(rename = "Product Revenue")]
    pub product_revenue: String,
    #[serde(rename = "Total Revenue")]
    pub total_revenue: String,
    #[serde(rename = "Order Category")]
    pub order_category: String,
    #[serde(rename = "Product Line")]
    pub product_line: String,
    #[serde(rename = "First/Repeat")]
    pub first_repeat: String,
    #[serde(rename = "Online/Offline")]
    pub online_offline: String,
}

/// Revenue and units for one product line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductLineSummary {
    pub name: String,
    pub revenue: f64,
    pub units: f64,
}

impl ProductLineSummary {
    /// Average selling price per unit (zero units reports 0.0)
    #[must_use]
    pub fn average_price(&self) -> f64 {
        safe_ratio(self.revenue, self.units)
    }
}

/// Aggregates derived from a batch of sales rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub total_orders: usize,
    /// Product lines in first-seen row order
    pub product_lines: Vec<ProductLineSummary>,
    pub estimated_cogs: f64,
}

/// Aggregate a batch of sales rows
#[must_use]
pub fn summarize(records: &[SalesRecord]) -> SalesSummary {
    let mut summary = SalesSummary {
        total_orders: records.len(),
        ..SalesSummary::default()
    };

    for record in records {
        let revenue = parse_amount(&record.total_revenue);
        let units = parse_amount(&record.quantity);
        summary.total_revenue += revenue;

        if record.product_line.is_empty() {
            continue;
        }
        match summary
            .product_lines
            .iter_mut()
            .find(|line| line.name == record.product_line)
        {
            Some(line) => {
                line.revenue += revenue;
                line.units += units;
            }
            None => summary.product_lines.push(ProductLineSummary {
                name: record.product_line.clone(),
                revenue,
                units,
            }),
        }
    }

    summary.estimated_cogs = summary.total_revenue * ESTIMATED_COGS_RATIO;
    summary
}

impl SalesSummary {
    /// Average revenue per order (zero orders reports 0.0)
    #[must_use]
    pub fn average_order_value(&self) -> f64 {
        safe_ratio(self.total_revenue, self.total_orders as f64)
    }

    /// The product line with the highest revenue, if any rows carried one
    #[must_use]
    pub fn top_product_line(&self) -> Option<&ProductLineSummary> {
        self.product_lines
            .iter()
            .max_by(|a, b| a.revenue.total_cmp(&b.revenue))
    }

    /// The categorized metric list for the metrics page
    #[must_use]
    pub fn to_metrics(&self) -> Vec<Metric> {
        let prior_revenue = self.total_revenue * PRIOR_REVENUE_FACTOR;
        let prior_orders = (self.total_orders as f64 * PRIOR_ORDERS_FACTOR).floor();
        let prior_cogs = prior_revenue * PRIOR_COGS_RATIO;

        let mut metrics = vec![
            Metric {
                id: "1".to_string(),
                name: "Total Revenue".to_string(),
                category: "Business Performance".to_string(),
                value: self.total_revenue,
                unit: MetricUnit::Currency,
                description: "Total revenue from all product lines and channels".to_string(),
                change: Some(percentage_change(self.total_revenue, prior_revenue)),
            },
            Metric {
                id: "2".to_string(),
                name: "Total Orders".to_string(),
                category: "Business Performance".to_string(),
                value: self.total_orders as f64,
                unit: MetricUnit::Count,
                description: "Total number of orders processed".to_string(),
                change: Some(percentage_change(self.total_orders as f64, prior_orders)),
            },
        ];

        for (index, line) in self.product_lines.iter().enumerate() {
            let prior = line.revenue * PRIOR_LINE_REVENUE_FACTOR;
            metrics.push(Metric {
                id: format!("pl-{}", index + 1),
                name: format!("{} Revenue", line.name),
                category: "Product Lines".to_string(),
                value: line.revenue,
                unit: MetricUnit::Currency,
                description: format!("Total revenue from {} product line", line.name),
                change: Some(percentage_change(line.revenue, prior)),
            });
        }

        metrics.push(Metric {
            id: "cogs-1".to_string(),
            name: "Total COGS".to_string(),
            category: "Cost of Goods".to_string(),
            value: self.estimated_cogs,
            unit: MetricUnit::Currency,
            description: "Total cost of goods sold".to_string(),
            change: Some(percentage_change(self.estimated_cogs, prior_cogs)),
        });

        metrics
    }
}

/// Built-in sample rows, used to seed an empty store and as the fallback
/// when the store is unreachable.
#[must_use]
pub fn sample_records() -> Vec<SalesRecord> {
    let row = |uuid: &str,
               invoice: &str,
               date: &str,
               customer: &str,
               item: &str,
               quantity: &str,
               revenue: &str,
               category: &str,
               line: &str,
               first_repeat: &str,
               channel: &str| SalesRecord {
        uuid: uuid.to_string(),
        invoice_number: invoice.to_string(),
        date: date.to_string(),
        customer: customer.to_string(),
        item: item.to_string(),
        quantity: quantity.to_string(),
        product_revenue: revenue.to_string(),
        total_revenue: revenue.to_string(),
        order_category: category.to_string(),
        product_line: line.to_string(),
        first_repeat: first_repeat.to_string(),
        online_offline: channel.to_string(),
    };

    vec![
        row(
            "s-001", "INV-1001", "2025-02-03", "Apex Abrasives", "KX-40 Fine", "45",
            "$54,000.00", "Direct", "KX", "Repeat", "Offline",
        ),
        row(
            "s-002", "INV-1002", "2025-02-04", "Borealis Coatings", "DX-20 Coarse", "30",
            "$54,750.00", "Direct", "DX", "Repeat", "Offline",
        ),
        row(
            "s-003", "INV-1003", "2025-02-07", "Cascade Surface Co", "EX-10 Blend", "62",
            "$58,900.00", "Online", "EX", "First", "Online",
        ),
        row(
            "s-004", "INV-1004", "2025-02-11", "Delta Blastworks", "KX-40 Fine", "28",
            "$33,600.00", "Online", "KX", "First", "Online",
        ),
        row(
            "s-005", "INV-1005", "2025-02-14", "Borealis Coatings", "DX-30 Medium", "41",
            "$73,800.00", "Direct", "DX", "Repeat", "Offline",
        ),
        row(
            "s-006", "INV-1006", "2025-02-18", "Eastgate Finishing", "EX-10 Blend", "25",
            "$23,750.00", "Direct", "EX", "Repeat", "Offline",
        ),
        row(
            "s-007", "INV-1007", "2025-02-21", "Apex Abrasives", "KX-50 Extra Fine", "36",
            "$46,800.00", "Direct", "KX", "Repeat", "Offline",
        ),
        row(
            "s-008", "INV-1008", "2025-02-25", "Foundry & Sons", "DX-20 Coarse", "18",
            "($32,400.00)", "Return", "DX", "Repeat", "Offline",
        ),
    ]
}
