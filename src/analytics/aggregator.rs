//! Segment aggregation pipeline.
//!
//! Groups the current-period records into (category, sub-category) segments,
//! derives the comparison and trend metrics, invokes the scorer per segment,
//! and emits the ordered summary table: each category's segments by
//! ascending rank, followed by that category's total row.

use crate::analytics::elasticity::discount_revenue_elasticity;
use crate::analytics::rank::dense_rank_desc;
use crate::analytics::trend::{yearly_series, YearlyAggregate};
use crate::models::{
    validate_records, CategoryTotal, CompanyGoal, CustomerPriority, ElasticitySignal,
    MarketContext, PolicyThresholds, RegionFilter, SaleRecord, SegmentRow, SummaryRow,
    TrendPoint, ValidationError,
};
use crate::scoring::{recommend, SegmentMetrics};
use std::collections::HashMap;
use tracing::debug;

/// Grouping identity of a segment within one reporting period.
pub type SegmentKey = (String, String);

#[derive(Debug, Default)]
struct SegmentAccum {
    revenue: f64,
    profit: f64,
    quantity: u64,
    discount_sum: f64,
    records: u32,
}

impl SegmentAccum {
    fn mean_discount(&self) -> f64 {
        // records is always >= 1 for an accumulated segment
        self.discount_sum / self.records as f64
    }
}

/// The aggregation engine.
///
/// Holds the scoring configuration by value; the configuration is immutable
/// for the lifetime of the engine, so concurrent summarize calls need no
/// synchronization.
#[derive(Debug, Clone)]
pub struct Aggregator {
    policy: PolicyThresholds,
    context: MarketContext,
}

impl Aggregator {
    pub fn new(policy: PolicyThresholds, context: MarketContext) -> Self {
        Self { policy, context }
    }

    pub fn policy(&self) -> &PolicyThresholds {
        &self.policy
    }

    pub fn context(&self) -> &MarketContext {
        &self.context
    }

    /// Build the summary table for one (year, region, goal, priority) request.
    ///
    /// `current` is the already-filtered current-period record set;
    /// `full_history` is the unfiltered dataset used for the prior-year
    /// comparison and the multi-year trend. An empty current selection is a
    /// legitimate state and returns an empty table.
    pub fn summarize(
        &self,
        full_history: &[SaleRecord],
        current: &[SaleRecord],
        current_year: i32,
        region: &RegionFilter,
        goal: CompanyGoal,
        priority: CustomerPriority,
    ) -> Result<Vec<SummaryRow>, ValidationError> {
        validate_records(current)?;
        validate_records(full_history)?;

        if current.is_empty() {
            return Ok(Vec::new());
        }

        let segments = group_segments(current);
        let prior_revenue = prior_year_revenue(full_history, current_year - 1, region);
        let trend_series = yearly_series(full_history);

        // Categories in order of first appearance in the current data.
        let mut categories: Vec<String> = Vec::new();
        for (category, _) in &segments.order {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }

        let mut rows = Vec::new();
        for category in &categories {
            let keys: Vec<&SegmentKey> = segments
                .order
                .iter()
                .filter(|key| key.0 == *category)
                .collect();

            let revenues: Vec<f64> = keys
                .iter()
                .map(|key| segments.accum[*key].revenue)
                .collect();
            let ranks = dense_rank_desc(&revenues);

            let mut segment_rows: Vec<SegmentRow> = keys
                .iter()
                .zip(ranks.iter())
                .map(|(&key, &rank)| {
                    self.build_segment_row(
                        key,
                        rank,
                        &segments.accum[key],
                        &prior_revenue,
                        &trend_series,
                        goal,
                        priority,
                    )
                })
                .collect();

            segment_rows
                .sort_by(|a, b| (a.rank, &a.sub_category).cmp(&(b.rank, &b.sub_category)));

            let total = category_total(category, &segment_rows);

            debug!(
                category = %category,
                segments = segment_rows.len(),
                revenue = total.revenue,
                "aggregated category"
            );

            rows.extend(segment_rows.into_iter().map(SummaryRow::Segment));
            rows.push(SummaryRow::CategoryTotal(total));
        }

        Ok(rows)
    }

    #[allow(clippy::too_many_arguments)]
    fn build_segment_row(
        &self,
        key: &SegmentKey,
        rank: u32,
        accum: &SegmentAccum,
        prior_revenue: &HashMap<SegmentKey, f64>,
        trend_series: &HashMap<SegmentKey, Vec<YearlyAggregate>>,
        goal: CompanyGoal,
        priority: CustomerPriority,
    ) -> SegmentRow {
        let discount = accum.mean_discount();

        // Prior revenue of 0 (or no prior record) yields no comparison,
        // never a division by zero.
        let yoy_revenue = prior_revenue
            .get(key)
            .filter(|&&prior| prior > 0.0)
            .map(|&prior| (accum.revenue - prior) / prior);

        let series = trend_series.get(key).map(Vec::as_slice).unwrap_or(&[]);
        let trend: Vec<TrendPoint> = series
            .iter()
            .map(|point| TrendPoint {
                year: point.year,
                revenue: point.revenue,
            })
            .collect();
        let elasticity = discount_revenue_elasticity(series);

        let metrics = SegmentMetrics {
            revenue: accum.revenue,
            profit: accum.profit,
            discount,
            yoy_revenue,
        };
        let action = recommend(&metrics, goal, priority, &self.policy, &self.context);

        SegmentRow {
            category: key.0.clone(),
            sub_category: key.1.clone(),
            rank,
            revenue: accum.revenue,
            profit: accum.profit,
            quantity: accum.quantity,
            discount,
            yoy_revenue,
            trend,
            elasticity,
            elasticity_signal: ElasticitySignal::classify(elasticity),
            action,
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(PolicyThresholds::default(), MarketContext::default())
    }
}

struct GroupedSegments {
    order: Vec<SegmentKey>,
    accum: HashMap<SegmentKey, SegmentAccum>,
}

fn group_segments(current: &[SaleRecord]) -> GroupedSegments {
    let mut order: Vec<SegmentKey> = Vec::new();
    let mut accum: HashMap<SegmentKey, SegmentAccum> = HashMap::new();

    for record in current {
        let key = (record.category.clone(), record.sub_category.clone());
        if !accum.contains_key(&key) {
            order.push(key.clone());
        }
        let entry = accum.entry(key).or_default();
        entry.revenue += record.sales;
        entry.profit += record.profit;
        entry.quantity += u64::from(record.quantity);
        entry.discount_sum += record.discount;
        entry.records += 1;
    }

    GroupedSegments { order, accum }
}

fn prior_year_revenue(
    full_history: &[SaleRecord],
    prior_year: i32,
    region: &RegionFilter,
) -> HashMap<SegmentKey, f64> {
    let mut revenue: HashMap<SegmentKey, f64> = HashMap::new();
    for record in full_history {
        if record.year != prior_year || !region.matches(&record.region) {
            continue;
        }
        let key = (record.category.clone(), record.sub_category.clone());
        *revenue.entry(key).or_insert(0.0) += record.sales;
    }
    revenue
}

fn category_total(category: &str, segment_rows: &[SegmentRow]) -> CategoryTotal {
    let revenue = segment_rows.iter().map(|row| row.revenue).sum();
    let profit = segment_rows.iter().map(|row| row.profit).sum();
    let quantity = segment_rows.iter().map(|row| row.quantity).sum();
    // Mean over zero segments is guarded, though a category only exists
    // because at least one segment does.
    let discount = if segment_rows.is_empty() {
        0.0
    } else {
        segment_rows.iter().map(|row| row.discount).sum::<f64>() / segment_rows.len() as f64
    };

    CategoryTotal {
        category: category.to_string(),
        revenue,
        profit,
        quantity,
        discount,
    }
}
