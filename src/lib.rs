//! Campaign Report - Products Campaign spreadsheet loader
//!
//! Reads the campaign report, normalizes headers and numeric columns, and
//! returns the data rows as ordered records.

pub mod data;

pub use data::{CellValue, LoaderConfig, LoaderError, Record, ReportLoader};
