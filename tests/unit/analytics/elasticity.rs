//! Unit tests for the discount/revenue elasticity proxy

use promotrix::analytics::{discount_revenue_elasticity, pearson, round2, YearlyAggregate};

fn year(year: i32, revenue: f64, mean_discount: f64) -> YearlyAggregate {
    YearlyAggregate {
        year,
        revenue,
        mean_discount,
    }
}

#[test]
fn pearson_perfect_positive() {
    let r = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
    assert!((r - 1.0).abs() < 1e-9);
}

#[test]
fn pearson_perfect_negative() {
    let r = pearson(&[1.0, 2.0, 3.0], &[6.0, 4.0, 2.0]).unwrap();
    assert!((r + 1.0).abs() < 1e-9);
}

#[test]
fn pearson_rejects_constant_series() {
    assert!(pearson(&[0.1, 0.1, 0.1], &[100.0, 200.0, 300.0]).is_none());
}

#[test]
fn pearson_rejects_short_series() {
    assert!(pearson(&[1.0], &[2.0]).is_none());
    assert!(pearson(&[], &[]).is_none());
}

#[test]
fn rounds_to_two_decimals() {
    assert_eq!(round2(0.6789), 0.68);
    assert_eq!(round2(-0.344), -0.34);
    assert_eq!(round2(1.0), 1.0);
}

#[test]
fn two_years_of_history_is_neutral() {
    let series = vec![year(2015, 100.0, 0.1), year(2016, 200.0, 0.2)];
    assert_eq!(discount_revenue_elasticity(&series), 0.0);
}

#[test]
fn three_years_yields_rounded_correlation() {
    let series = vec![
        year(2015, 100.0, 0.1),
        year(2016, 200.0, 0.2),
        year(2017, 300.0, 0.3),
    ];
    assert_eq!(discount_revenue_elasticity(&series), 1.0);
}

#[test]
fn inverse_relationship_is_negative() {
    let series = vec![
        year(2015, 300.0, 0.1),
        year(2016, 200.0, 0.2),
        year(2017, 100.0, 0.3),
    ];
    assert_eq!(discount_revenue_elasticity(&series), -1.0);
}

#[test]
fn non_finite_years_are_excluded_not_propagated() {
    let series = vec![
        year(2014, f64::NAN, 0.05),
        year(2015, 100.0, 0.1),
        year(2016, 200.0, 0.2),
        year(2017, 300.0, 0.3),
    ];
    assert_eq!(discount_revenue_elasticity(&series), 1.0);
}

#[test]
fn excluding_bad_years_can_drop_below_minimum() {
    let series = vec![
        year(2015, 100.0, f64::NAN),
        year(2016, 200.0, 0.2),
        year(2017, 300.0, 0.3),
    ];
    assert_eq!(discount_revenue_elasticity(&series), 0.0);
}

#[test]
fn constant_discount_series_is_neutral() {
    let series = vec![
        year(2015, 100.0, 0.15),
        year(2016, 200.0, 0.15),
        year(2017, 300.0, 0.15),
    ];
    assert_eq!(discount_revenue_elasticity(&series), 0.0);
}
