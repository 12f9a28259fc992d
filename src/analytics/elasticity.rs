//! Discount/revenue elasticity proxy.

use crate::analytics::trend::YearlyAggregate;

/// Minimum distinct years of history before the proxy is computed.
pub const MIN_TREND_YEARS: usize = 3;

/// Pearson correlation coefficient between two equal-length series.
///
/// Returns `None` when fewer than two points remain or either series has
/// zero variance (a constant discount across years carries no signal).
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some(covariance / (var_x.sqrt() * var_y.sqrt()))
}

/// Round a coefficient to two decimals for display stability.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Correlate yearly mean discount against yearly revenue for one segment.
///
/// Non-finite entries are excluded pairwise before correlating rather than
/// poisoning the whole series. Fewer than [`MIN_TREND_YEARS`] usable years,
/// or a degenerate series, yields the neutral 0.0.
pub fn discount_revenue_elasticity(series: &[YearlyAggregate]) -> f64 {
    let mut discounts = Vec::with_capacity(series.len());
    let mut revenues = Vec::with_capacity(series.len());
    for point in series {
        if point.mean_discount.is_finite() && point.revenue.is_finite() {
            discounts.push(point.mean_discount);
            revenues.push(point.revenue);
        }
    }

    if discounts.len() < MIN_TREND_YEARS {
        return 0.0;
    }

    match pearson(&discounts, &revenues) {
        Some(coefficient) => round2(coefficient),
        None => 0.0,
    }
}
