//! Shared fixture builders for the loader tests.

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A cell written into a fixture sheet.
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
    Blank,
}

/// Write a header on physical row 1 (row 0 left as the blank spacer) and
/// data rows below it.
pub fn write_report(
    dir: &Path,
    name: &str,
    headers: &[&str],
    rows: &[Vec<Cell<'_>>],
) -> Result<PathBuf, XlsxError> {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sponsored Products")?;

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(1, col as u16, *header)?;
    }
    for (r, row) in rows.iter().enumerate() {
        write_row(worksheet, r as u32 + 2, row)?;
    }

    workbook.save(&path)?;
    Ok(path)
}

pub fn write_row(worksheet: &mut Worksheet, row: u32, cells: &[Cell<'_>]) -> Result<(), XlsxError> {
    for (col, cell) in cells.iter().enumerate() {
        let col = col as u16;
        match cell {
            Cell::Text(text) => {
                worksheet.write_string(row, col, *text)?;
            }
            Cell::Number(n) => {
                worksheet.write_number(row, col, *n)?;
            }
            Cell::Bool(b) => {
                worksheet.write_boolean(row, col, *b)?;
            }
            Cell::Blank => {}
        }
    }
    Ok(())
}

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}
