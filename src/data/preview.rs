//! Report Preview Module
//! Renders the summary line and the leading records as pretty JSON.

use super::frame::records_to_dataframe;
use super::record::Record;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Number of records shown after the summary line.
pub const PREVIEW_RECORDS: usize = 3;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Failed to build preview frame: {0}")]
    Frame(#[from] PolarsError),
    #[error("Failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
}

/// `Rows: <n> | Columns: <m>` followed by up to three records.
pub fn render_preview(records: &[Record]) -> Result<String, PreviewError> {
    let frame = records_to_dataframe(records)?;
    let head = &records[..records.len().min(PREVIEW_RECORDS)];
    Ok(format!(
        "Rows: {} | Columns: {}\n{}",
        frame.height(),
        frame.width(),
        serde_json::to_string_pretty(head)?
    ))
}
