//! Shared data models spanning the engine layers.

pub mod record;
pub mod strategy;
pub mod summary;

pub use record::{validate_records, RegionFilter, SaleRecord, ValidationError};
pub use strategy::{CompanyGoal, CustomerPriority, MarketContext, PolicyThresholds};
pub use summary::{
    CategoryTotal, DiscountAction, ElasticitySignal, SegmentRow, SummaryRow, TrendPoint,
};
