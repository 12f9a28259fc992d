//! Additive discount-strategy scorer.
//!
//! A pure function of its inputs: the same segment metrics, strategy
//! selection, and configuration always produce the same action.

use crate::models::{
    CompanyGoal, CustomerPriority, DiscountAction, MarketContext, PolicyThresholds,
};
use crate::scoring::adjustments::{first_match, goal_adjustments, priority_adjustments};

/// Score at or above which the recommendation is Increase.
pub const INCREASE_MIN_SCORE: i32 = 4;
/// Score at or below which the recommendation is Reduce.
///
/// A superseded rule set used -2 here; -1 is the canonical cutoff.
pub const REDUCE_MAX_SCORE: i32 = -1;

const INFLATION_DRAG_RATE: f64 = 0.05;

/// The slice of a segment row the scorer reads.
#[derive(Debug, Clone, Copy)]
pub struct SegmentMetrics {
    pub revenue: f64,
    pub profit: f64,
    /// Mean discount fraction for the current period.
    pub discount: f64,
    /// Fractional YoY revenue change; `None` when no prior-year data exists.
    pub yoy_revenue: Option<f64>,
}

/// Compute the signed integer score for one segment.
///
/// Every signal group contributes independently; only the goal and priority
/// adjustments are first-match-only within their own lists.
pub fn score_segment(
    metrics: &SegmentMetrics,
    goal: CompanyGoal,
    priority: CustomerPriority,
    policy: &PolicyThresholds,
    context: &MarketContext,
) -> i32 {
    let mut score = 0;

    // Revenue contribution
    if metrics.revenue > policy.high_revenue {
        score += 2;
    } else if metrics.revenue < policy.low_revenue {
        score -= 1;
    }

    // Profit margin effect
    if metrics.profit < policy.low_profit {
        score -= 2;
    } else {
        score += 1;
    }

    // Discount level
    if metrics.discount < policy.min_discount {
        score += 1;
    } else if metrics.discount > policy.max_discount {
        score -= 1;
    }

    // External market conditions
    if context.inflation_rate > INFLATION_DRAG_RATE {
        score -= 1;
    }
    if context.competitor_discount > metrics.discount {
        score += 2;
    }

    score += first_match(&goal_adjustments(metrics, goal, priority, policy));
    score += first_match(&priority_adjustments(metrics, priority, policy));

    score
}

/// Map a score onto the three-way action.
pub fn decide(score: i32) -> DiscountAction {
    if score >= INCREASE_MIN_SCORE {
        DiscountAction::Increase
    } else if score <= REDUCE_MAX_SCORE {
        DiscountAction::Reduce
    } else {
        DiscountAction::Maintain
    }
}

/// Score a segment and return its recommended action.
pub fn recommend(
    metrics: &SegmentMetrics,
    goal: CompanyGoal,
    priority: CustomerPriority,
    policy: &PolicyThresholds,
    context: &MarketContext,
) -> DiscountAction {
    decide(score_segment(metrics, goal, priority, policy, context))
}
