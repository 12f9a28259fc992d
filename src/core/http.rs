//! HTTP endpoint server using Axum

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::analytics::Aggregator;
use crate::metrics::Metrics;
use crate::models::{CompanyGoal, CustomerPriority, RegionFilter, SaleRecord};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub dataset: Arc<Vec<SaleRecord>>,
    pub aggregator: Arc<Aggregator>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "promotrix-discount-engine",
        "records_loaded": state.dataset.len()
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct SummaryQuery {
    year: i32,
    region: Option<String>,
    /// Display label, e.g. "Revenue Growth"; anything else is Unspecified.
    goal: Option<CompanyGoal>,
    /// Display label, e.g. "Loyal Customers"; anything else is Unspecified.
    priority: Option<CustomerPriority>,
}

/// Compute the discount-strategy summary table for one filter selection.
async fn get_summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryQuery>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let region = RegionFilter::parse(params.region.as_deref().unwrap_or("All"));
    let goal = params.goal.unwrap_or(CompanyGoal::Unspecified);
    let priority = params.priority.unwrap_or(CustomerPriority::Unspecified);

    let current: Vec<SaleRecord> = state
        .dataset
        .iter()
        .filter(|record| record.year == params.year && region.matches(&record.region))
        .cloned()
        .collect();

    let rows = state
        .aggregator
        .summarize(
            &state.dataset,
            &current,
            params.year,
            &region,
            goal,
            priority,
        )
        .map_err(|e| {
            error!(error = %e, year = params.year, "Summary aggregation rejected input");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": e.to_string() })),
            )
        })?;

    state.metrics.summaries_computed_total.inc();
    state
        .metrics
        .summary_rows_emitted_total
        .inc_by(rows.len() as u64);

    Ok(Json(json!({
        "year": params.year,
        "region": region.to_string(),
        "generated_at": chrono::Utc::now(),
        "row_count": rows.len(),
        "rows": rows
    })))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/summary", get(get_summary))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    dataset: Vec<SaleRecord>,
    aggregator: Aggregator,
) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let start_time = Arc::new(Instant::now());

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time,
        dataset: Arc::new(dataset),
        aggregator: Arc::new(aggregator),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
