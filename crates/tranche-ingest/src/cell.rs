//! Owned cell values decoupled from the spreadsheet reader
//!
//! The normalizer operates on [`Cell`] rows rather than `calamine::Data`
//! directly, so row-level logic (and its tests) runs without workbook bytes.

use calamine::Data;
use chrono::NaiveDate;

/// A single spreadsheet cell after extraction
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl Cell {
    /// True for empty cells and whitespace-only text
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(naive) => Cell::Date(naive.date()),
                None => Cell::Empty,
            },
            Data::DateTimeIso(s) => {
                let prefix = s.get(0..10).unwrap_or(s.as_str());
                match NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
                    Ok(date) => Cell::Date(date),
                    Err(_) => Cell::Text(s.clone()),
                }
            }
            Data::DurationIso(s) => Cell::Text(s.clone()),
            // Formula errors (#DIV/0!, #N/A, ...) are treated as absent values
            Data::Error(_) => Cell::Empty,
        }
    }
}

/// True when any cell in the row carries content
pub(crate) fn row_has_content(row: &[Cell]) -> bool {
    row.iter().any(|c| !c.is_blank())
}
