//! Cell Value Module
//! Typed cell values and the coerce-or-missing numeric conversion.

use calamine::Data;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;

/// Datetime rendering used in text output.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single value of a report record.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell, NA marker or failed numeric coercion.
    #[default]
    Missing,
    Number(f64),
    Text(String),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Convert a raw spreadsheet cell, treating NA markers as missing.
    pub fn from_cell(cell: &Data, na_markers: &[String]) -> Self {
        match cell {
            Data::Empty => CellValue::Missing,
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::String(s) => {
                if na_markers.iter().any(|m| m == s) {
                    CellValue::Missing
                } else {
                    CellValue::Text(s.clone())
                }
            }
            // a serial outside chrono's range keeps its raw number
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(ndt) => CellValue::DateTime(ndt),
                None => CellValue::Number(dt.as_f64()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Text(e.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Reinterpret this value as a number, or missing when it can't be one.
    pub fn into_numeric(self) -> Self {
        match coerce_numeric(&self) {
            Some(n) => CellValue::Number(n),
            None => CellValue::Missing,
        }
    }
}

/// Whole numbers that fit an `i64` are written without a fractional part.
fn as_whole(n: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    (n.is_finite() && n.fract() == 0.0 && (-LIMIT..LIMIT).contains(&n)).then_some(n as i64)
}

/// Coerce a value to a number. Never fails: anything unparseable is `None`.
///
/// Text is trimmed and parsed as a decimal float, so `"1e3"`, `"+4"` and
/// `"inf"` are accepted while `"1,200"` and `"12%"` are not. A NaN result is
/// treated as missing. Booleans map to `1` and `0`.
pub fn coerce_numeric(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Number(n) if n.is_nan() => None,
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
        CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        CellValue::DateTime(_) | CellValue::Missing => None,
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Missing => Ok(()),
            CellValue::Number(n) => match as_whole(*n) {
                Some(i) => write!(f, "{i}"),
                None => write!(f, "{n}"),
            },
            CellValue::Text(s) => f.write_str(s),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_FORMAT)),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Missing => serializer.serialize_none(),
            CellValue::Number(n) => match as_whole(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::DateTime(_) => serializer.collect_str(self),
        }
    }
}
