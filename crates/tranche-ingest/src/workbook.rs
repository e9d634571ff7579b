//! Workbook loading and sheet selection
//!
//! The only file in this crate that touches the spreadsheet reader; the
//! rest of the normalizer works over owned [`Cell`] rows.

use crate::cell::Cell;
use crate::error::{IngestError, Result};
use calamine::{open_workbook_auto_from_rs, Reader};
use std::io::Cursor;

/// What we are looking for, used to pick the most relevant sheet by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SheetKind {
    LoanTape,
    PerformanceHistory,
}

impl SheetKind {
    fn name_hints(&self) -> &'static [&'static str] {
        match self {
            SheetKind::LoanTape => &["loan", "tape"],
            SheetKind::PerformanceHistory => &["performance", "history"],
        }
    }
}

/// Open the workbook and return the rows of the most relevant sheet.
/// The filename only labels diagnostics; format detection is content-based.
pub(crate) fn load_rows(bytes: &[u8], filename: &str, kind: SheetKind) -> Result<Vec<Vec<Cell>>> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|source| IngestError::Workbook {
            file: filename.to_string(),
            source,
        })?;

    let names = workbook.sheet_names().to_vec();
    if names.is_empty() {
        return Err(IngestError::NoSheets(filename.to_string()));
    }

    let sheet = select_sheet(&names, kind);
    tracing::debug!(file = filename, sheet = %sheet, "loading sheet");

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|source| IngestError::Sheet {
            sheet: sheet.clone(),
            source,
        })?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(Cell::from).collect())
        .collect())
}

/// Prefer a sheet whose name matches the kind's hints; fall back to the
/// first sheet.
pub(crate) fn select_sheet(names: &[String], kind: SheetKind) -> String {
    for hint in kind.name_hints() {
        if let Some(name) = names.iter().find(|n| n.to_lowercase().contains(hint)) {
            return name.clone();
        }
    }
    names[0].clone()
}
