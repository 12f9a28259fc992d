//! Environment-based configuration.
//!
//! All configuration is read once at startup. Policy thresholds and market
//! context are immutable for the life of the process; reconfiguration means
//! a restart, never a mid-computation mutation.

use crate::models::{MarketContext, PolicyThresholds};
use std::env;

/// Deployment environment name, defaulting to "sandbox".
pub fn get_environment() -> String {
    env::var("PROMOTRIX_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

fn env_f64(name: &str, default: f64) -> Result<f64, String> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<f64>()
            .map_err(|_| format!("{} must be a number, got: {}", name, raw)),
        Err(_) => Ok(default),
    }
}

/// Load policy thresholds from `POLICY_*` env vars, falling back to the
/// defaults for anything unset.
pub fn load_policy() -> Result<PolicyThresholds, String> {
    let defaults = PolicyThresholds::default();
    PolicyThresholds::new(
        env_f64("POLICY_HIGH_REVENUE", defaults.high_revenue)?,
        env_f64("POLICY_LOW_REVENUE", defaults.low_revenue)?,
        env_f64("POLICY_HIGH_PROFIT", defaults.high_profit)?,
        env_f64("POLICY_LOW_PROFIT", defaults.low_profit)?,
        env_f64("POLICY_MIN_DISCOUNT", defaults.min_discount)?,
        env_f64("POLICY_MAX_DISCOUNT", defaults.max_discount)?,
    )
}

/// Load market context from `MARKET_*` env vars, falling back to defaults.
pub fn load_market_context() -> Result<MarketContext, String> {
    let defaults = MarketContext::default();
    MarketContext::new(
        env_f64("MARKET_INFLATION_RATE", defaults.inflation_rate)?,
        env_f64("MARKET_COMPETITOR_DISCOUNT", defaults.competitor_discount)?,
    )
}
