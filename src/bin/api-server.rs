//! Promotrix API Server
//!
//! Serves the discount-strategy summary table over HTTP. The dataset and
//! scoring configuration are loaded once at startup and shared immutably;
//! the service is stateless per request and can be horizontally scaled.

use dotenvy::dotenv;
use promotrix::analytics::Aggregator;
use promotrix::config;
use promotrix::core::http::start_server;
use promotrix::logging;
use promotrix::services::{CsvSalesProvider, SalesDataProvider};
use std::env;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let dataset_path =
        env::var("SALES_DATASET").unwrap_or_else(|_| "data/sales.csv".to_string());

    let environment = config::get_environment();
    info!("Starting Promotrix API Server");
    info!(environment = %environment, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let policy = config::load_policy().map_err(|e| {
        error!(error = %e, "Invalid policy configuration");
        e
    })?;
    let context = config::load_market_context().map_err(|e| {
        error!(error = %e, "Invalid market context configuration");
        e
    })?;
    let aggregator = Aggregator::new(policy, context);

    let provider = CsvSalesProvider::new(&dataset_path);
    let dataset = provider.load().map_err(|e| {
        error!(error = %e, path = %dataset_path, "Failed to load sales dataset");
        e
    })?;
    info!(records = dataset.len(), path = %dataset_path, "Sales dataset loaded");

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, dataset, aggregator).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            info!("API server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
