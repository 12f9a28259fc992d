//! Derived summary rows emitted to the rendering collaborator.

use serde::{Deserialize, Serialize};

/// Three-way discount recommendation for a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountAction {
    #[serde(rename = "Increase discount")]
    Increase,
    #[serde(rename = "Reduce discount")]
    Reduce,
    #[serde(rename = "Maintain discount")]
    Maintain,
}

/// Display classification for the elasticity proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElasticitySignal {
    Positive,
    Negative,
    Neutral,
}

impl ElasticitySignal {
    /// Classify a rounded correlation coefficient into display bands.
    pub fn classify(elasticity: f64) -> Self {
        if elasticity > 0.5 {
            ElasticitySignal::Positive
        } else if elasticity < -0.5 {
            ElasticitySignal::Negative
        } else {
            ElasticitySignal::Neutral
        }
    }
}

/// One point of a segment's multi-year revenue trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    pub revenue: f64,
}

/// Aggregated metrics for one (category, sub-category) segment.
///
/// Built fresh on every aggregation call from the current filtered record
/// set; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRow {
    pub category: String,
    pub sub_category: String,
    pub rank: u32,
    pub revenue: f64,
    pub profit: f64,
    pub quantity: u64,
    /// Mean discount fraction over the segment's current-period records.
    pub discount: f64,
    /// Fractional revenue change versus the prior year; `None` when the
    /// segment has no prior-year revenue to compare against.
    pub yoy_revenue: Option<f64>,
    /// Full-history yearly revenue series, sorted by year ascending.
    pub trend: Vec<TrendPoint>,
    /// Correlation between yearly mean discount and yearly revenue,
    /// rounded to 2 decimals; 0.0 when fewer than 3 years of history exist.
    pub elasticity: f64,
    pub elasticity_signal: ElasticitySignal,
    pub action: DiscountAction,
}

/// Roll-up of all segment rows sharing a category.
///
/// Carries no rank, trend, elasticity, or action; those are per-segment
/// strategic fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub revenue: f64,
    pub profit: f64,
    pub quantity: u64,
    /// Mean of the segment mean discounts.
    pub discount: f64,
}

/// One row of the final summary table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryRow {
    Segment(SegmentRow),
    CategoryTotal(CategoryTotal),
}

impl SummaryRow {
    pub fn category(&self) -> &str {
        match self {
            SummaryRow::Segment(row) => &row.category,
            SummaryRow::CategoryTotal(total) => &total.category,
        }
    }

    pub fn as_segment(&self) -> Option<&SegmentRow> {
        match self {
            SummaryRow::Segment(row) => Some(row),
            SummaryRow::CategoryTotal(_) => None,
        }
    }

    pub fn as_category_total(&self) -> Option<&CategoryTotal> {
        match self {
            SummaryRow::CategoryTotal(total) => Some(total),
            SummaryRow::Segment(_) => None,
        }
    }
}
