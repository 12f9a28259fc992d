//! Transaction-level sales records and input validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single transaction row from the sales dataset.
///
/// Records are the immutable source of truth for the aggregation pipeline;
/// they are never mutated after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub category: String,
    pub sub_category: String,
    pub region: String,
    pub year: i32,
    pub sales: f64,
    pub profit: f64,
    pub discount: f64,
    pub quantity: u32,
}

/// Validation failure for a malformed input record.
///
/// The whole aggregation call is rejected before any derivation begins;
/// the error names the offending field so the caller can point at it.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("record {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index}: non-numeric value in field `{field}`")]
    NonNumeric { index: usize, field: &'static str },

    #[error("record {index}: field `{field}` out of range: {value}")]
    OutOfRange {
        index: usize,
        field: &'static str,
        value: f64,
    },
}

impl SaleRecord {
    /// Check a single record against the input contract.
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingField {
                index,
                field: "category",
            });
        }
        if self.sub_category.trim().is_empty() {
            return Err(ValidationError::MissingField {
                index,
                field: "sub_category",
            });
        }
        if self.region.trim().is_empty() {
            return Err(ValidationError::MissingField {
                index,
                field: "region",
            });
        }
        if !self.sales.is_finite() {
            return Err(ValidationError::NonNumeric {
                index,
                field: "sales",
            });
        }
        if self.sales < 0.0 {
            return Err(ValidationError::OutOfRange {
                index,
                field: "sales",
                value: self.sales,
            });
        }
        if !self.profit.is_finite() {
            return Err(ValidationError::NonNumeric {
                index,
                field: "profit",
            });
        }
        if !self.discount.is_finite() {
            return Err(ValidationError::NonNumeric {
                index,
                field: "discount",
            });
        }
        if !(0.0..=1.0).contains(&self.discount) {
            return Err(ValidationError::OutOfRange {
                index,
                field: "discount",
                value: self.discount,
            });
        }
        Ok(())
    }
}

/// Validate an entire record set, failing on the first malformed record.
pub fn validate_records(records: &[SaleRecord]) -> Result<(), ValidationError> {
    for (index, record) in records.iter().enumerate() {
        record.validate(index)?;
    }
    Ok(())
}

/// Region selector for the current reporting period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionFilter {
    All,
    Region(String),
}

impl RegionFilter {
    /// Parse the selector string used by the dashboard ("All" means no filter).
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            RegionFilter::All
        } else {
            RegionFilter::Region(value.to_string())
        }
    }

    pub fn matches(&self, region: &str) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Region(wanted) => wanted == region,
        }
    }
}

impl std::fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionFilter::All => write!(f, "All"),
            RegionFilter::Region(name) => write!(f, "{}", name),
        }
    }
}
