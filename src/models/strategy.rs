//! Strategic inputs and scoring configuration.

use serde::{Deserialize, Serialize};

/// Company-level strategic focus selected on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyGoal {
    #[serde(rename = "Revenue Growth")]
    RevenueGrowth,
    #[serde(rename = "Profit Protection")]
    ProfitProtection,
    #[serde(rename = "Market Share Expansion")]
    MarketShareExpansion,
    #[serde(rename = "Customer Retention")]
    CustomerRetention,
    /// Any other goal string; contributes no goal adjustment.
    #[serde(other)]
    Unspecified,
}

/// Target customer segment selected on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerPriority {
    #[serde(rename = "New Customers")]
    NewCustomers,
    #[serde(rename = "High-Value Accounts")]
    HighValueAccounts,
    #[serde(rename = "Loyal Customers")]
    LoyalCustomers,
    /// Any other priority string; contributes no priority adjustment.
    #[serde(other)]
    Unspecified,
}

/// Revenue/profit/discount bands driving the scoring rules.
///
/// Loaded once at startup and treated as immutable for the life of the
/// process; passed by reference into the scorer on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyThresholds {
    pub high_revenue: f64,
    pub low_revenue: f64,
    pub high_profit: f64,
    pub low_profit: f64,
    pub min_discount: f64,
    pub max_discount: f64,
}

impl Default for PolicyThresholds {
    fn default() -> Self {
        Self {
            high_revenue: 70_000.0,
            low_revenue: 30_000.0,
            high_profit: 6_500.0,
            low_profit: 4_000.0,
            min_discount: 0.1,
            max_discount: 0.2,
        }
    }
}

impl PolicyThresholds {
    pub fn new(
        high_revenue: f64,
        low_revenue: f64,
        high_profit: f64,
        low_profit: f64,
        min_discount: f64,
        max_discount: f64,
    ) -> Result<Self, String> {
        if low_revenue >= high_revenue {
            return Err(format!(
                "low_revenue must be below high_revenue, got: {} >= {}",
                low_revenue, high_revenue
            ));
        }
        if low_profit >= high_profit {
            return Err(format!(
                "low_profit must be below high_profit, got: {} >= {}",
                low_profit, high_profit
            ));
        }
        if !(0.0..=1.0).contains(&min_discount) || !(0.0..=1.0).contains(&max_discount) {
            return Err("Discount bounds must be within [0, 1]".to_string());
        }
        if min_discount > max_discount {
            return Err(format!(
                "min_discount must not exceed max_discount, got: {} > {}",
                min_discount, max_discount
            ));
        }
        Ok(Self {
            high_revenue,
            low_revenue,
            high_profit,
            low_profit,
            min_discount,
            max_discount,
        })
    }
}

/// External market conditions feeding the scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketContext {
    pub inflation_rate: f64,
    pub competitor_discount: f64,
}

impl Default for MarketContext {
    fn default() -> Self {
        Self {
            inflation_rate: 0.06,
            competitor_discount: 0.15,
        }
    }
}

impl MarketContext {
    pub fn new(inflation_rate: f64, competitor_discount: f64) -> Result<Self, String> {
        if !inflation_rate.is_finite() {
            return Err("inflation_rate must be a finite number".to_string());
        }
        if !(0.0..=1.0).contains(&competitor_discount) {
            return Err(format!(
                "competitor_discount must be within [0, 1], got: {}",
                competitor_discount
            ));
        }
        Ok(Self {
            inflation_rate,
            competitor_discount,
        })
    }
}
