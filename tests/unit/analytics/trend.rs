//! Unit tests for multi-year trend derivation

use promotrix::analytics::yearly_series;
use promotrix::models::SaleRecord;

fn record(sub_category: &str, year: i32, sales: f64, discount: f64) -> SaleRecord {
    SaleRecord {
        category: "Furniture".to_string(),
        sub_category: sub_category.to_string(),
        region: "West".to_string(),
        year,
        sales,
        profit: 10.0,
        discount,
        quantity: 1,
    }
}

#[test]
fn sums_revenue_per_year() {
    let history = vec![
        record("Chairs", 2016, 100.0, 0.1),
        record("Chairs", 2016, 50.0, 0.3),
        record("Chairs", 2017, 200.0, 0.2),
    ];
    let series = yearly_series(&history);
    let chairs = &series[&("Furniture".to_string(), "Chairs".to_string())];

    assert_eq!(chairs.len(), 2);
    assert_eq!(chairs[0].year, 2016);
    assert_eq!(chairs[0].revenue, 150.0);
    assert!((chairs[0].mean_discount - 0.2).abs() < 1e-9);
    assert_eq!(chairs[1].year, 2017);
    assert_eq!(chairs[1].revenue, 200.0);
}

#[test]
fn series_is_sorted_by_year_regardless_of_input_order() {
    let history = vec![
        record("Tables", 2017, 300.0, 0.3),
        record("Tables", 2015, 100.0, 0.1),
        record("Tables", 2016, 200.0, 0.2),
    ];
    let series = yearly_series(&history);
    let tables = &series[&("Furniture".to_string(), "Tables".to_string())];

    let years: Vec<i32> = tables.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![2015, 2016, 2017]);
}

#[test]
fn segments_are_grouped_independently() {
    let history = vec![
        record("Chairs", 2016, 100.0, 0.1),
        record("Tables", 2016, 900.0, 0.4),
    ];
    let series = yearly_series(&history);

    assert_eq!(series.len(), 2);
    assert_eq!(
        series[&("Furniture".to_string(), "Chairs".to_string())][0].revenue,
        100.0
    );
    assert_eq!(
        series[&("Furniture".to_string(), "Tables".to_string())][0].revenue,
        900.0
    );
}
