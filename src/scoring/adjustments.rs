//! Ordered, first-match-only goal and priority adjustments.
//!
//! Each list is evaluated top to bottom and only the first applicable entry
//! contributes to the score. The order is part of the rule set: a goal of
//! Customer Retention with a Loyal Customers priority takes the goal bonus
//! here and the retention bonus in the priority list, never both goal rows.

use crate::models::{CompanyGoal, CustomerPriority, PolicyThresholds};
use crate::scoring::scorer::SegmentMetrics;

/// One evaluated rule of an adjustment list.
#[derive(Debug, Clone, Copy)]
pub struct Adjustment {
    pub applies: bool,
    pub delta: i32,
}

impl Adjustment {
    fn new(applies: bool, delta: i32) -> Self {
        Self { applies, delta }
    }
}

/// Return the delta of the first applicable adjustment, or 0.
pub fn first_match(adjustments: &[Adjustment]) -> i32 {
    adjustments
        .iter()
        .find(|a| a.applies)
        .map(|a| a.delta)
        .unwrap_or(0)
}

/// Company-goal adjustments, in their fixed evaluation order.
///
/// A missing YoY value satisfies no comparison: a segment without
/// prior-year history never takes the Revenue Growth bonus.
pub fn goal_adjustments(
    metrics: &SegmentMetrics,
    goal: CompanyGoal,
    priority: CustomerPriority,
    policy: &PolicyThresholds,
) -> [Adjustment; 4] {
    [
        Adjustment::new(
            goal == CompanyGoal::RevenueGrowth
                && metrics.yoy_revenue.map_or(false, |yoy| yoy > 0.0),
            2,
        ),
        Adjustment::new(
            goal == CompanyGoal::ProfitProtection && metrics.profit < policy.low_profit,
            -2,
        ),
        Adjustment::new(goal == CompanyGoal::MarketShareExpansion, 1),
        Adjustment::new(
            goal == CompanyGoal::CustomerRetention
                && priority == CustomerPriority::LoyalCustomers,
            2,
        ),
    ]
}

/// Customer-priority adjustments, in their fixed evaluation order.
pub fn priority_adjustments(
    metrics: &SegmentMetrics,
    priority: CustomerPriority,
    policy: &PolicyThresholds,
) -> [Adjustment; 3] {
    [
        Adjustment::new(priority == CustomerPriority::NewCustomers, 1),
        Adjustment::new(
            priority == CustomerPriority::HighValueAccounts
                && metrics.profit > policy.high_profit,
            2,
        ),
        Adjustment::new(
            priority == CustomerPriority::LoyalCustomers
                && metrics.yoy_revenue.map_or(false, |yoy| yoy <= 0.0),
            1,
        ),
    ]
}
