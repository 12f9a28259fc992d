//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics, and the summary table.


use serde_json::Value;

use test_utils::TestApiServer;

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "promotrix-discount-engine");
    assert_eq!(body["records_loaded"], 6);
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(
        body.contains("http_requests_total"),
        "Expected http_requests_total metric"
    );
    assert!(
        body.contains("http_request_duration_seconds"),
        "Expected http_request_duration_seconds metric"
    );
    assert!(
        body.contains("http_requests_in_flight"),
        "Expected http_requests_in_flight metric"
    );
}

#[tokio::test]
async fn summary_returns_segments_and_totals() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/summary").add_query_param("year", 2017).await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["year"], 2017);
    assert_eq!(body["region"], "All");
    // Furniture: Tables + Chairs + total; Technology: Phones + total
    assert_eq!(body["row_count"], 5);

    let rows = body["rows"].as_array().expect("rows array");
    assert_eq!(rows[0]["kind"], "segment");
    assert_eq!(rows[0]["sub_category"], "Tables");
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[2]["kind"], "category_total");
    assert_eq!(rows[2]["category"], "Furniture");
    assert_eq!(rows[2]["revenue"], 800.0);
}

#[tokio::test]
async fn summary_respects_the_region_filter() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .get("/api/summary")
        .add_query_param("year", 2017)
        .add_query_param("region", "East")
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["region"], "East");
    // Only Technology/Phones sells in the East: one segment plus one total
    assert_eq!(body["row_count"], 2);
    let rows = body["rows"].as_array().expect("rows array");
    assert_eq!(rows[0]["category"], "Technology");
}

#[tokio::test]
async fn summary_with_no_matching_records_is_empty_not_an_error() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .get("/api/summary")
        .add_query_param("year", 1999)
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["row_count"], 0);
    assert_eq!(body["rows"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn summary_accepts_goal_and_priority_labels() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .get("/api/summary")
        .add_query_param("year", 2017)
        .add_query_param("goal", "Revenue Growth")
        .add_query_param("priority", "Loyal Customers")
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let rows = body["rows"].as_array().expect("rows array");
    for row in rows {
        if row["kind"] == "segment" {
            let action = row["action"].as_str().expect("action label");
            assert!(
                action == "Increase discount"
                    || action == "Reduce discount"
                    || action == "Maintain discount"
            );
        }
    }
}

#[tokio::test]
async fn summary_rows_include_trend_and_elasticity() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/summary").add_query_param("year", 2017).await;
    let body: Value = response.json();

    let rows = body["rows"].as_array().expect("rows array");
    let chairs = rows
        .iter()
        .find(|row| row["sub_category"] == "Chairs")
        .expect("chairs row");

    // Chairs has 2015-2017 history: full trend plus a computed elasticity
    assert_eq!(chairs["trend"].as_array().map(Vec::len), Some(3));
    assert_eq!(chairs["elasticity"], 1.0);
    assert_eq!(chairs["elasticity_signal"], "Positive");
    // 300 vs 200 the year before
    assert!((chairs["yoy_revenue"].as_f64().unwrap() - 0.5).abs() < 1e-9);
}

#[tokio::test]
async fn missing_year_parameter_is_a_client_error() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/summary").await;
    assert!(response.status_code().is_client_error());
}
