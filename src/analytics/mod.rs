//! Aggregation pipeline: grouping, comparisons, trends, ranking.

pub mod aggregator;
pub mod elasticity;
pub mod rank;
pub mod trend;

pub use aggregator::{Aggregator, SegmentKey};
pub use elasticity::{discount_revenue_elasticity, pearson, round2, MIN_TREND_YEARS};
pub use rank::dense_rank_desc;
pub use trend::{yearly_series, YearlyAggregate};
