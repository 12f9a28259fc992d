//! Discount-strategy scoring rules.

pub mod adjustments;
pub mod scorer;

pub use adjustments::{first_match, goal_adjustments, priority_adjustments, Adjustment};
pub use scorer::{
    decide, recommend, score_segment, SegmentMetrics, INCREASE_MIN_SCORE, REDUCE_MAX_SCORE,
};
