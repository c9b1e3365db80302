//! Record Frame Module
//! Builds a Polars DataFrame view of loaded records.

use super::record::Record;
use super::value::CellValue;
use polars::prelude::*;

/// Column names across all records, in first-seen order.
fn column_names(records: &[Record]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !names.contains(&key) {
                names.push(key);
            }
        }
    }
    names
}

/// Build one column. Float64 when every present value is a number, Boolean
/// when every present value is a bool, String otherwise.
fn build_column(name: &str, records: &[Record]) -> Column {
    let values: Vec<Option<&CellValue>> = records
        .iter()
        .map(|record| record.get(name).filter(|value| !value.is_missing()))
        .collect();

    let present = || values.iter().flatten();

    if present().all(|value| matches!(value, CellValue::Number(_))) {
        let floats: Vec<Option<f64>> = values
            .iter()
            .map(|value| value.and_then(CellValue::as_number))
            .collect();
        Column::new(name.into(), floats)
    } else if present().all(|value| matches!(value, CellValue::Bool(_))) {
        let bools: Vec<Option<bool>> = values
            .iter()
            .map(|value| match value {
                Some(CellValue::Bool(b)) => Some(*b),
                _ => None,
            })
            .collect();
        Column::new(name.into(), bools)
    } else {
        let strings: Vec<Option<String>> = values
            .iter()
            .map(|value| value.map(ToString::to_string))
            .collect();
        Column::new(name.into(), strings)
    }
}

/// Convert records to a DataFrame with one column per distinct key.
pub fn records_to_dataframe(records: &[Record]) -> PolarsResult<DataFrame> {
    let columns = column_names(records)
        .into_iter()
        .map(|name| build_column(name, records))
        .collect();
    DataFrame::new(columns)
}
