//! Report Loader Module
//! Opens the campaign spreadsheet and hands the sheet to the processor.

use super::processor::ReportProcessor;
use super::record::Record;
use calamine::{open_workbook_auto, Reader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// File name of the report, looked up next to the executable by default.
pub const DEFAULT_REPORT_FILE: &str = "Products Campaign.xlsx";

/// Physical row (zero-based) holding the column names. Row 0 is a blank
/// spacer in the exported report.
pub const DEFAULT_HEADER_ROW: u32 = 1;

/// Columns read as numbers rather than text.
pub const NUMERIC_COLUMNS: [&str; 12] = [
    "Impressions",
    "Last Year Impressions",
    "Clicks",
    "Last Year Clicks",
    "Spend",
    "Last Year Spend",
    "Cost Per Click (CPC)",
    "Last Year Cost Per Click (CPC)",
    "7 Day Total Orders (#)",
    "Total Advertising Cost of Sales (ACOS)",
    "Total Return on Advertising Spend (ROAS)",
    "7 Day Total Sales",
];

/// Text cells with exactly this content are read as missing.
pub const DEFAULT_NA_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to open report {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("Report {} has no sheets", path.display())]
    NoSheets { path: PathBuf },
    #[error("Failed to read sheet {sheet}: {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
    #[error("Failed to locate executable directory: {0}")]
    Locate(#[from] std::io::Error),
}

/// Where and how to read the report.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub path: PathBuf,
    /// First sheet when `None`.
    pub sheet: Option<String>,
    pub header_row: u32,
    pub numeric_columns: Vec<String>,
    pub na_markers: Vec<String>,
}

impl LoaderConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet: None,
            header_row: DEFAULT_HEADER_ROW,
            numeric_columns: NUMERIC_COLUMNS.iter().map(|s| s.to_string()).collect(),
            na_markers: DEFAULT_NA_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Default report location: `Products Campaign.xlsx` in the directory of
    /// the running executable.
    pub fn beside_executable() -> Result<Self, LoaderError> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self::new(dir.join(DEFAULT_REPORT_FILE)))
    }

    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    pub fn with_header_row(mut self, header_row: u32) -> Self {
        self.header_row = header_row;
        self
    }

    pub fn with_numeric_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numeric_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_na_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.na_markers = markers.into_iter().map(Into::into).collect();
        self
    }
}

/// Loads the campaign report into typed records.
pub struct ReportLoader {
    config: LoaderConfig,
}

impl ReportLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Read the report and return its data rows in sheet order.
    ///
    /// The workbook is only read; its handle is dropped before returning.
    pub fn load(&self) -> Result<Vec<Record>, LoaderError> {
        let path = &self.config.path;
        debug!(path = %path.display(), "opening report");

        let range = {
            let mut workbook =
                open_workbook_auto(path).map_err(|source| LoaderError::FileAccess {
                    path: path.clone(),
                    source,
                })?;

            let sheet = match &self.config.sheet {
                Some(name) => name.clone(),
                None => workbook
                    .sheet_names()
                    .first()
                    .cloned()
                    .ok_or_else(|| LoaderError::NoSheets { path: path.clone() })?,
            };

            workbook
                .worksheet_range(&sheet)
                .map_err(|source| LoaderError::Sheet { sheet, source })?
        };

        let records = ReportProcessor::process(&range, &self.config);
        info!(
            path = %path.display(),
            rows = records.len(),
            columns = records.first().map_or(0, Record::len),
            "loaded report"
        );
        Ok(records)
    }
}
