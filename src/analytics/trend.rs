//! Multi-year revenue trend derivation.
//!
//! Trends are always built from the full history rather than the filtered
//! current-period subset, so a segment's trend stays comparable as the
//! dashboard filters change.

use crate::analytics::aggregator::SegmentKey;
use crate::models::SaleRecord;
use std::collections::HashMap;

/// One year of a segment's history: summed revenue and mean discount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyAggregate {
    pub year: i32,
    pub revenue: f64,
    pub mean_discount: f64,
}

/// Group the full history by (segment, year) and sum revenue per year.
///
/// Each segment's series is sorted by year ascending, so the result is
/// stable under reordering of the input records.
pub fn yearly_series(history: &[SaleRecord]) -> HashMap<SegmentKey, Vec<YearlyAggregate>> {
    struct YearAccum {
        revenue: f64,
        discount_sum: f64,
        records: u32,
    }

    let mut grouped: HashMap<SegmentKey, HashMap<i32, YearAccum>> = HashMap::new();
    for record in history {
        let key = (record.category.clone(), record.sub_category.clone());
        let year_entry = grouped
            .entry(key)
            .or_default()
            .entry(record.year)
            .or_insert(YearAccum {
                revenue: 0.0,
                discount_sum: 0.0,
                records: 0,
            });
        year_entry.revenue += record.sales;
        year_entry.discount_sum += record.discount;
        year_entry.records += 1;
    }

    grouped
        .into_iter()
        .map(|(key, years)| {
            let mut series: Vec<YearlyAggregate> = years
                .into_iter()
                .map(|(year, accum)| YearlyAggregate {
                    year,
                    revenue: accum.revenue,
                    mean_discount: accum.discount_sum / accum.records as f64,
                })
                .collect();
            series.sort_by_key(|point| point.year);
            (key, series)
        })
        .collect()
}
