//! Loan tape normalization

use crate::cell::{row_has_content, Cell};
use crate::columns::{map_headers, resolve_tape_column, TapeColumn};
use crate::fields;
use crate::report::ParseReport;
use crate::workbook::{self, SheetKind};
use tranche_core::{LoanRecord, PaymentStatus};

const EMPTY: Cell = Cell::Empty;

/// Parse a loan tape workbook into normalized loan records.
///
/// Never returns an error: structural failures are reported on the
/// [`ParseReport`].
pub fn parse_loan_tape(bytes: &[u8], filename: &str) -> ParseReport<LoanRecord> {
    match workbook::load_rows(bytes, filename, SheetKind::LoanTape) {
        Ok(rows) => parse_loan_rows(&rows),
        Err(e) => ParseReport::rejected(e.to_string()),
    }
}

/// Normalize pre-extracted rows (header row + data rows) into loan records.
/// Public so callers holding already-extracted tabular data can skip the
/// workbook layer.
pub fn parse_loan_rows(rows: &[Vec<Cell>]) -> ParseReport<LoanRecord> {
    let mut report = ParseReport::new();

    let Some(header_idx) = rows.iter().position(|row| row_has_content(row)) else {
        report.errors.push("no data rows found in sheet".to_string());
        return report;
    };

    let (columns, unmapped) = map_headers(&rows[header_idx], resolve_tape_column);
    report.unmapped_columns = unmapped;

    let required = [
        (TapeColumn::LoanId, "loan id"),
        (TapeColumn::CurrentBalance, "current balance"),
        (TapeColumn::InterestRate, "interest rate"),
    ];
    let missing: Vec<&str> = required
        .iter()
        .filter(|(col, _)| !columns.contains_key(col))
        .map(|(_, label)| *label)
        .collect();
    if !missing.is_empty() {
        report
            .errors
            .push(format!("missing required columns: {}", missing.join(", ")));
        return report;
    }

    let cell = |row: &[Cell], col: TapeColumn| -> Cell {
        columns
            .get(&col)
            .and_then(|i| row.get(*i))
            .unwrap_or(&EMPTY)
            .clone()
    };

    // Track LTV scales seen so mixed-scale tapes get a warning
    let mut saw_decimal_ltv = false;
    let mut saw_percent_ltv = false;

    for (offset, row) in rows[header_idx + 1..].iter().enumerate() {
        // 1-based spreadsheet row number for diagnostics
        let row_number = header_idx + offset + 2;

        if !row_has_content(row) {
            continue;
        }

        let loan_id = fields::parse_text(&cell(row, TapeColumn::LoanId));
        let current_balance = fields::parse_number(&cell(row, TapeColumn::CurrentBalance));

        let (Some(loan_id), Some(current_balance)) = (loan_id, current_balance) else {
            report.warnings.push(format!(
                "row {}: skipped - missing loan id or current balance",
                row_number
            ));
            continue;
        };

        let raw_ltv = fields::parse_number(&cell(row, TapeColumn::CurrentLtv));
        if let Some(v) = raw_ltv {
            if v > 0.0 && v <= fields::LTV_DECIMAL_CUTOFF {
                saw_decimal_ltv = true;
            } else if v > fields::LTV_DECIMAL_CUTOFF {
                saw_percent_ltv = true;
            }
        }

        let status_cell = cell(row, TapeColumn::PaymentStatus);
        let payment_status = if status_cell.is_blank() {
            None
        } else {
            // Unrecognized status values default to current
            Some(fields::parse_status(&status_cell).unwrap_or(PaymentStatus::Current))
        };

        let record = LoanRecord {
            loan_id,
            borrower_name: fields::parse_text(&cell(row, TapeColumn::BorrowerName)),
            original_balance: fields::parse_number(&cell(row, TapeColumn::OriginalBalance)),
            current_balance,
            interest_rate: fields::parse_number(&cell(row, TapeColumn::InterestRate))
                .map(fields::normalize_rate),
            origination_date: fields::parse_date(&cell(row, TapeColumn::OriginationDate)),
            maturity_date: fields::parse_date(&cell(row, TapeColumn::MaturityDate)),
            term_months: fields::parse_count(&cell(row, TapeColumn::TermMonths)),
            payment_status,
            property_type: fields::parse_text(&cell(row, TapeColumn::PropertyType)),
            property_state: fields::parse_text(&cell(row, TapeColumn::PropertyState)),
            property_city: fields::parse_text(&cell(row, TapeColumn::PropertyCity)),
            property_value: fields::parse_number(&cell(row, TapeColumn::PropertyValue)),
            original_ltv: fields::parse_number(&cell(row, TapeColumn::OriginalLtv))
                .map(fields::normalize_ltv),
            current_ltv: raw_ltv.map(fields::normalize_ltv),
            dscr: fields::parse_number(&cell(row, TapeColumn::Dscr)).filter(|v| *v >= 0.0),
            lien_position: fields::parse_text(&cell(row, TapeColumn::LienPosition)),
            appraisal_date: fields::parse_date(&cell(row, TapeColumn::AppraisalDate)),
            loan_purpose: fields::parse_text(&cell(row, TapeColumn::LoanPurpose)),
        };
        report.data.push(record);
    }

    if saw_decimal_ltv && saw_percent_ltv {
        report.warnings.push(
            "loan-to-value column mixes decimal and percent scales; decimal values were scaled to percent"
                .to_string(),
        );
    }

    if report.data.is_empty() {
        report
            .errors
            .push("no valid loan records parsed from tape".to_string());
    } else {
        report.success = true;
    }
    tracing::debug!(
        records = report.data.len(),
        warnings = report.warnings.len(),
        "loan tape normalized"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn header(names: &[&str]) -> Vec<Cell> {
        names.iter().map(|n| text(n)).collect()
    }

    #[test]
    fn test_minimal_round_trip() {
        let rows = vec![
            header(&["Loan ID", "Current Balance", "Rate"]),
            vec![text("L1"), text("$100,000"), text("8%")],
        ];
        let report = parse_loan_rows(&rows);

        assert!(report.success, "errors: {:?}", report.errors);
        assert_eq!(report.data.len(), 1);
        let record = &report.data[0];
        assert_eq!(record.loan_id, "L1");
        assert_eq!(record.current_balance, 100_000.0);
        assert_eq!(record.interest_rate, Some(8.0));
    }

    #[test]
    fn test_missing_required_column_fails() {
        let rows = vec![
            header(&["Loan ID", "Current Balance"]),
            vec![text("L1"), text("100000")],
        ];
        let report = parse_loan_rows(&rows);

        assert!(!report.success);
        assert_eq!(report.data.len(), 0);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("interest rate"));
    }

    #[test]
    fn test_rows_without_identity_are_dropped_with_warning() {
        let rows = vec![
            header(&["Loan ID", "Current Balance", "Rate"]),
            vec![text("L1"), text("100000"), text("7.5")],
            vec![Cell::Empty, text("250000"), text("8.0")],
            vec![text("L3"), Cell::Empty, text("6.9")],
        ];
        let report = parse_loan_rows(&rows);

        assert!(report.success);
        assert_eq!(report.data.len(), 1);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("row 3"));
        assert!(report.warnings[1].contains("row 4"));
    }

    #[test]
    fn test_blank_rows_skipped_silently() {
        let rows = vec![
            header(&["Loan ID", "Current Balance", "Rate"]),
            vec![Cell::Empty, Cell::Empty, Cell::Empty],
            vec![text("L1"), text("100000"), text("7.5")],
            vec![text(" "), Cell::Empty, Cell::Empty],
        ];
        let report = parse_loan_rows(&rows);

        assert_eq!(report.data.len(), 1);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_leading_blank_rows_before_header() {
        let rows = vec![
            vec![Cell::Empty, Cell::Empty],
            header(&["Loan ID", "Current Balance", "Rate"]),
            vec![text("L1"), text("100000"), text("0.075")],
        ];
        let report = parse_loan_rows(&rows);
        assert!(report.success);
        assert_eq!(report.data[0].interest_rate, Some(7.5));
    }

    #[test]
    fn test_unmapped_columns_reported_without_failing() {
        let rows = vec![
            header(&["Loan ID", "Current Balance", "Rate", "Servicer Notes"]),
            vec![text("L1"), text("100000"), text("7.5"), text("fine")],
        ];
        let report = parse_loan_rows(&rows);

        assert!(report.success);
        assert_eq!(report.unmapped_columns, vec!["Servicer Notes".to_string()]);
    }

    #[test]
    fn test_status_and_optional_fields() {
        let rows = vec![
            header(&[
                "Loan ID",
                "Current Balance",
                "Rate",
                "Status",
                "State",
                "Property Type",
                "DSCR",
                "LTV",
            ]),
            vec![
                text("L1"),
                text("500000"),
                text("7.25"),
                text("60 days"),
                text("TX"),
                text("Multifamily"),
                text("1.35"),
                text("0.72"),
            ],
            vec![
                text("L2"),
                text("250000"),
                text("8.00"),
                text("gibberish"),
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
            ],
        ];
        let report = parse_loan_rows(&rows);

        let l1 = &report.data[0];
        assert_eq!(l1.payment_status, Some(PaymentStatus::SixtyDay));
        assert_eq!(l1.property_state.as_deref(), Some("TX"));
        assert_eq!(l1.dscr, Some(1.35));
        assert_eq!(l1.current_ltv, Some(72.0));

        // Unrecognized status defaults to current; absent cells stay absent
        let l2 = &report.data[1];
        assert_eq!(l2.payment_status, Some(PaymentStatus::Current));
        assert_eq!(l2.property_state, None);
        assert_eq!(l2.dscr, None);
    }

    #[test]
    fn test_mixed_ltv_scales_warn() {
        let rows = vec![
            header(&["Loan ID", "Current Balance", "Rate", "LTV"]),
            vec![text("L1"), text("100000"), text("7.0"), text("0.65")],
            vec![text("L2"), text("100000"), text("7.0"), text("72")],
        ];
        let report = parse_loan_rows(&rows);

        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("decimal and percent")));
        assert_eq!(report.data[0].current_ltv, Some(65.0));
        assert_eq!(report.data[1].current_ltv, Some(72.0));
    }

    #[test]
    fn test_zero_valid_records_is_an_error() {
        let rows = vec![
            header(&["Loan ID", "Current Balance", "Rate"]),
            vec![Cell::Empty, text("100000"), text("7.5")],
        ];
        let report = parse_loan_rows(&rows);

        assert!(!report.success);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("no valid loan records")));
    }

    #[test]
    fn test_numeric_loan_ids() {
        let rows = vec![
            header(&["Loan ID", "Current Balance", "Rate"]),
            vec![Cell::Number(101.0), Cell::Number(350_000.0), Cell::Number(0.0825)],
        ];
        let report = parse_loan_rows(&rows);

        assert_eq!(report.data[0].loan_id, "101");
        assert_eq!(report.data[0].interest_rate, Some(8.25));
    }
}
