//! Report Processor Module
//! Turns a raw sheet range into typed records: header naming, empty column
//! removal and numeric coercion.

use super::loader::LoaderConfig;
use super::record::Record;
use super::value::CellValue;
use calamine::{Data, Range};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Handles the cleaning steps applied to a loaded sheet.
pub struct ReportProcessor;

impl ReportProcessor {
    /// Convert a sheet range into records.
    ///
    /// Positions are absolute sheet positions: the header is read from
    /// `config.header_row` and column A is always column 0, whatever the
    /// used range of the sheet starts at.
    pub fn process(range: &Range<Data>, config: &LoaderConfig) -> Vec<Record> {
        let Some((last_row, last_col)) = range.end() else {
            debug!("sheet is empty");
            return Vec::new();
        };
        if last_row < config.header_row {
            debug!(header_row = config.header_row, last_row, "no header row in sheet");
            return Vec::new();
        }

        let width = last_col as usize + 1;
        let headers = Self::header_names(range, config.header_row, width);

        let rows: Vec<Vec<CellValue>> = (config.header_row + 1..=last_row)
            .filter(|&row| !Self::is_blank_row(range, row, width))
            .map(|row| {
                (0..width)
                    .map(|col| {
                        range
                            .get_value((row, col as u32))
                            .map(|cell| CellValue::from_cell(cell, &config.na_markers))
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        let kept = Self::non_empty_columns(&rows, width);
        debug!(
            rows = rows.len(),
            columns = width,
            dropped = width - kept.len(),
            "collected data rows"
        );

        let numeric: HashSet<&str> = config.numeric_columns.iter().map(String::as_str).collect();
        let coerce: Vec<bool> = kept
            .iter()
            .map(|&col| numeric.contains(headers[col].as_str()))
            .collect();

        let absent: Vec<&str> = config
            .numeric_columns
            .iter()
            .map(String::as_str)
            .filter(|name| !kept.iter().any(|&col| headers[col] == *name))
            .collect();
        if !absent.is_empty() {
            debug!(?absent, "numeric columns not present in report");
        }

        rows.into_iter()
            .map(|mut row| {
                let mut record = Record::with_capacity(kept.len());
                for (&col, &is_numeric) in kept.iter().zip(&coerce) {
                    let value = std::mem::take(&mut row[col]);
                    let value = if is_numeric { value.into_numeric() } else { value };
                    record.push(headers[col].clone(), value);
                }
                record
            })
            .collect()
    }

    /// Column names from the header row. Blank headers become
    /// `Unnamed: <index>` and repeated names get `.1`, `.2`, ... suffixes.
    fn header_names(range: &Range<Data>, header_row: u32, width: usize) -> Vec<String> {
        let raw = (0..width).map(|col| match range.get_value((header_row, col as u32)) {
            Some(cell) if !is_blank(cell) => cell.to_string(),
            _ => format!("Unnamed: {col}"),
        });

        let mut seen: HashSet<String> = HashSet::with_capacity(width);
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut names = Vec::with_capacity(width);

        for name in raw {
            if seen.insert(name.clone()) {
                names.push(name);
                continue;
            }
            let count = counts.entry(name.clone()).or_insert(0);
            let unique = loop {
                *count += 1;
                let candidate = format!("{name}.{count}");
                if !seen.contains(&candidate) {
                    break candidate;
                }
            };
            seen.insert(unique.clone());
            names.push(unique);
        }

        names
    }

    fn is_blank_row(range: &Range<Data>, row: u32, width: usize) -> bool {
        (0..width).all(|col| range.get_value((row, col as u32)).map_or(true, is_blank))
    }

    /// Indices of columns holding at least one non-missing value.
    fn non_empty_columns(rows: &[Vec<CellValue>], width: usize) -> Vec<usize> {
        (0..width)
            .filter(|&col| rows.iter().any(|row| !row[col].is_missing()))
            .collect()
    }
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}
