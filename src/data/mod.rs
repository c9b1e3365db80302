//! Data module - report loading and record processing

mod frame;
mod loader;
mod preview;
mod processor;
mod record;
mod value;

pub use frame::records_to_dataframe;
pub use loader::{
    LoaderConfig, LoaderError, ReportLoader, DEFAULT_HEADER_ROW, DEFAULT_NA_MARKERS,
    DEFAULT_REPORT_FILE, NUMERIC_COLUMNS,
};
pub use preview::{render_preview, PreviewError, PREVIEW_RECORDS};
pub use processor::ReportProcessor;
pub use record::Record;
pub use value::{coerce_numeric, CellValue};
