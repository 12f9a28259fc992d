//! External collaborator boundaries (data loading).

pub mod provider;

pub use provider::{CsvSalesProvider, ProviderError, SalesDataProvider};
