//! Performance history normalization

use crate::cell::{row_has_content, Cell};
use crate::columns::{map_headers, resolve_history_column, HistoryColumn};
use crate::fields;
use crate::report::ParseReport;
use crate::workbook::{self, SheetKind};
use chrono::Datelike;
use tranche_core::PerformanceHistoryRecord;

const EMPTY: Cell = Cell::Empty;

/// Parse a monthly performance history workbook. Rows are sorted ascending
/// by period before being returned.
pub fn parse_performance_history(
    bytes: &[u8],
    filename: &str,
) -> ParseReport<PerformanceHistoryRecord> {
    match workbook::load_rows(bytes, filename, SheetKind::PerformanceHistory) {
        Ok(rows) => parse_history_rows(&rows),
        Err(e) => ParseReport::rejected(e.to_string()),
    }
}

/// Normalize pre-extracted history rows
pub fn parse_history_rows(rows: &[Vec<Cell>]) -> ParseReport<PerformanceHistoryRecord> {
    let mut report = ParseReport::new();

    let Some(header_idx) = rows.iter().position(|row| row_has_content(row)) else {
        report.errors.push("no data rows found in sheet".to_string());
        return report;
    };

    let (columns, unmapped) = map_headers(&rows[header_idx], resolve_history_column);
    report.unmapped_columns = unmapped;

    if !columns.contains_key(&HistoryColumn::Period) {
        report
            .errors
            .push("missing required column: period".to_string());
        return report;
    }

    let cell = |row: &[Cell], col: HistoryColumn| -> Cell {
        columns
            .get(&col)
            .and_then(|i| row.get(*i))
            .unwrap_or(&EMPTY)
            .clone()
    };
    let fraction = |row: &[Cell], col: HistoryColumn| -> Option<f64> {
        fields::parse_number(&cell(row, col)).map(fields::normalize_fraction)
    };

    for (offset, row) in rows[header_idx + 1..].iter().enumerate() {
        let row_number = header_idx + offset + 2;

        if !row_has_content(row) {
            continue;
        }

        let Some(period) = fields::parse_date(&cell(row, HistoryColumn::Period)) else {
            report.warnings.push(format!(
                "row {}: skipped - unparsable period",
                row_number
            ));
            continue;
        };
        // Snapshots are monthly; normalize to the first of the month
        let period = period.with_day(1).unwrap_or(period);

        report.data.push(PerformanceHistoryRecord {
            period,
            portfolio_balance: fields::parse_number(&cell(row, HistoryColumn::PortfolioBalance)),
            loan_count: fields::parse_count(&cell(row, HistoryColumn::LoanCount)),
            pct_current: fraction(row, HistoryColumn::PctCurrent),
            pct_30_day: fraction(row, HistoryColumn::Pct30Day),
            pct_60_day: fraction(row, HistoryColumn::Pct60Day),
            pct_90_day: fraction(row, HistoryColumn::Pct90Day),
            pct_default: fraction(row, HistoryColumn::PctDefault),
            prepayments: fields::parse_number(&cell(row, HistoryColumn::Prepayments)),
            new_originations: fields::parse_number(&cell(row, HistoryColumn::NewOriginations)),
        });
    }

    report.data.sort_by_key(|r| r.period);

    if report.data.is_empty() {
        report
            .errors
            .push("no valid performance history rows parsed".to_string());
    } else {
        report.success = true;
    }
    report
}
