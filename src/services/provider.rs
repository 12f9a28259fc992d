//! Sales dataset provider boundary.
//!
//! The engine itself never loads data; a provider hands it a validated
//! record set. The CSV implementation backs the service binary.

use crate::models::SaleRecord;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: missing required field `{field}`")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: non-numeric value `{value}` in field `{field}`")]
    NonNumeric {
        row: usize,
        field: &'static str,
        value: String,
    },
}

pub trait SalesDataProvider {
    /// Load the full transaction history.
    fn load(&self) -> Result<Vec<SaleRecord>, ProviderError>;
}

/// Raw CSV row before field-level parsing. Headers follow the dataset's
/// original column names.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Category")]
    category: Option<String>,
    #[serde(rename = "Sub-Category")]
    sub_category: Option<String>,
    #[serde(rename = "Region")]
    region: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Sales")]
    sales: Option<String>,
    #[serde(rename = "Profit")]
    profit: Option<String>,
    #[serde(rename = "Discount")]
    discount: Option<String>,
    #[serde(rename = "Quantity")]
    quantity: Option<String>,
}

pub struct CsvSalesProvider {
    path: PathBuf,
}

impl CsvSalesProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SalesDataProvider for CsvSalesProvider {
    fn load(&self) -> Result<Vec<SaleRecord>, ProviderError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<RawRow>().enumerate() {
            let raw = row?;
            records.push(parse_row(index, raw)?);
        }
        Ok(records)
    }
}

fn required(
    row: usize,
    field: &'static str,
    value: Option<String>,
) -> Result<String, ProviderError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ProviderError::MissingField { row, field }),
    }
}

fn numeric<T: std::str::FromStr>(
    row: usize,
    field: &'static str,
    value: Option<String>,
) -> Result<T, ProviderError> {
    let raw = required(row, field, value)?;
    raw.trim()
        .parse::<T>()
        .map_err(|_| ProviderError::NonNumeric {
            row,
            field,
            value: raw,
        })
}

fn parse_row(index: usize, raw: RawRow) -> Result<SaleRecord, ProviderError> {
    Ok(SaleRecord {
        category: required(index, "Category", raw.category)?,
        sub_category: required(index, "Sub-Category", raw.sub_category)?,
        region: required(index, "Region", raw.region)?,
        year: numeric(index, "Year", raw.year)?,
        sales: numeric(index, "Sales", raw.sales)?,
        profit: numeric(index, "Profit", raw.profit)?,
        discount: numeric(index, "Discount", raw.discount)?,
        quantity: numeric(index, "Quantity", raw.quantity)?,
    })
}
