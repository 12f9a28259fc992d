//! Promotrix — discount-strategy recommendation engine.
//!
//! Aggregates transaction-level sales records into category/sub-category
//! segments, derives year-over-year and multi-year trend metrics, and scores
//! each segment into a three-way discount recommendation served over HTTP.

pub mod analytics;
pub mod config;
pub mod core;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod scoring;
pub mod services;
