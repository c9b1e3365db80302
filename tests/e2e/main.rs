//! End-to-end tests for the report loader.
//!
//! Each test writes the workbook it needs into a temp directory with
//! `rust_xlsxwriter`, loads it back through `ReportLoader`, and asserts on the
//! records.

mod common;

pub use common::*;
