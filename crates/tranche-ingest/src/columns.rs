//! Header alias resolution
//!
//! Column headers are resolved against a flat, data-driven alias table
//! rather than a fuzzy matcher. Lookups compare the normalized header
//! (lowercase, trimmed) and its squashed form with separators removed, so
//! "Orig Balance", "original_balance", and "OriginalBalance" all resolve to
//! the same canonical column.

use crate::cell::Cell;
use std::collections::HashMap;

/// Canonical loan tape columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapeColumn {
    LoanId,
    BorrowerName,
    OriginalBalance,
    CurrentBalance,
    InterestRate,
    OriginationDate,
    MaturityDate,
    TermMonths,
    PaymentStatus,
    PropertyType,
    PropertyState,
    PropertyCity,
    PropertyValue,
    OriginalLtv,
    CurrentLtv,
    Dscr,
    LienPosition,
    AppraisalDate,
    LoanPurpose,
}

/// Canonical performance history columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryColumn {
    Period,
    PortfolioBalance,
    LoanCount,
    PctCurrent,
    Pct30Day,
    Pct60Day,
    Pct90Day,
    PctDefault,
    Prepayments,
    NewOriginations,
}

const TAPE_ALIASES: &[(TapeColumn, &[&str])] = &[
    (
        TapeColumn::LoanId,
        &[
            "loan id", "loan_id", "loanid", "loan #", "loan no", "loan no.", "loan number",
            "id", "account id", "account number", "asset id",
        ],
    ),
    (
        TapeColumn::BorrowerName,
        &["borrower", "borrower name", "borrower_name", "obligor", "sponsor"],
    ),
    (
        TapeColumn::OriginalBalance,
        &[
            "original balance", "orig balance", "original_balance", "orig bal",
            "original loan amount", "loan amount", "original amount",
        ],
    ),
    (
        TapeColumn::CurrentBalance,
        &[
            "current balance", "current_balance", "curr balance", "curr bal",
            "outstanding balance", "unpaid balance", "upb", "current upb", "balance",
            "principal balance",
        ],
    ),
    (
        TapeColumn::InterestRate,
        &[
            "interest rate", "interest_rate", "rate", "note rate", "coupon", "int rate",
            "interest",
        ],
    ),
    (
        TapeColumn::OriginationDate,
        &[
            "origination date", "origination_date", "orig date", "note date", "funding date",
            "closing date", "origination",
        ],
    ),
    (
        TapeColumn::MaturityDate,
        &["maturity date", "maturity_date", "maturity", "balloon date"],
    ),
    (
        TapeColumn::TermMonths,
        &["term", "term months", "term_months", "loan term", "term (months)"],
    ),
    (
        TapeColumn::PaymentStatus,
        &[
            "payment status", "payment_status", "status", "loan status",
            "delinquency status", "performance status",
        ],
    ),
    (
        TapeColumn::PropertyType,
        &["property type", "property_type", "collateral type", "asset type", "prop type"],
    ),
    (
        TapeColumn::PropertyState,
        &["state", "property state", "property_state", "st", "prop state"],
    ),
    (
        TapeColumn::PropertyCity,
        &["city", "property city", "property_city"],
    ),
    (
        TapeColumn::PropertyValue,
        &[
            "property value", "property_value", "appraised value", "collateral value",
            "value", "market value",
        ],
    ),
    (
        TapeColumn::OriginalLtv,
        &["original ltv", "orig ltv", "original_ltv", "ltv at origination"],
    ),
    (
        TapeColumn::CurrentLtv,
        &["ltv", "current ltv", "current_ltv", "loan to value", "loan-to-value", "ltv %"],
    ),
    (
        TapeColumn::Dscr,
        &[
            "dscr", "debt service coverage", "debt service coverage ratio",
            "debt_service_coverage", "dcr",
        ],
    ),
    (
        TapeColumn::LienPosition,
        &["lien", "lien position", "lien_position", "position", "seniority"],
    ),
    (
        TapeColumn::AppraisalDate,
        &[
            "appraisal date", "appraisal_date", "appraisal", "valuation date",
            "last appraisal",
        ],
    ),
    (
        TapeColumn::LoanPurpose,
        &["purpose", "loan purpose", "loan_purpose", "use of proceeds"],
    ),
];

const HISTORY_ALIASES: &[(HistoryColumn, &[&str])] = &[
    (
        HistoryColumn::Period,
        &[
            "period", "month", "date", "as of", "as of date", "reporting period",
            "snapshot date",
        ],
    ),
    (
        HistoryColumn::PortfolioBalance,
        &[
            "portfolio balance", "portfolio_balance", "balance", "total balance",
            "ending balance", "upb",
        ],
    ),
    (
        HistoryColumn::LoanCount,
        &["loan count", "loan_count", "loans", "# loans", "number of loans", "count"],
    ),
    (
        HistoryColumn::PctCurrent,
        &["current %", "% current", "pct current", "current pct", "current", "current rate"],
    ),
    (
        HistoryColumn::Pct30Day,
        &["30 day %", "% 30 day", "30 day", "30 dpd", "pct 30", "dq 30", "30-59", "30+"],
    ),
    (
        HistoryColumn::Pct60Day,
        &["60 day %", "% 60 day", "60 day", "60 dpd", "pct 60", "dq 60", "60-89", "60+"],
    ),
    (
        HistoryColumn::Pct90Day,
        &["90 day %", "% 90 day", "90 day", "90 dpd", "pct 90", "dq 90", "90-119", "90+"],
    ),
    (
        HistoryColumn::PctDefault,
        &["default %", "% default", "pct default", "default", "default rate", "npl %"],
    ),
    (
        HistoryColumn::Prepayments,
        &["prepayments", "prepayment", "prepaid", "cpr"],
    ),
    (
        HistoryColumn::NewOriginations,
        &["new originations", "originations", "new loans", "new volume"],
    ),
];

/// Lowercase and trim a header cell
pub(crate) fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Strip separators so "orig_balance" and "Orig Balance" compare equal
fn squash(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

fn resolve<C: Copy>(header: &str, table: &[(C, &[&str])]) -> Option<C> {
    let normalized = normalize_header(header);
    for (column, aliases) in table {
        if aliases.iter().any(|a| *a == normalized) {
            return Some(*column);
        }
    }
    let squashed = squash(&normalized);
    if squashed.is_empty() {
        return None;
    }
    for (column, aliases) in table {
        if aliases.iter().any(|a| squash(a) == squashed) {
            return Some(*column);
        }
    }
    None
}

pub(crate) fn resolve_tape_column(header: &str) -> Option<TapeColumn> {
    resolve(header, TAPE_ALIASES)
}

pub(crate) fn resolve_history_column(header: &str) -> Option<HistoryColumn> {
    resolve(header, HISTORY_ALIASES)
}

/// Map a header row to canonical columns. The first header resolving to a
/// given column wins; headers with no alias match are returned for the
/// report's `unmapped_columns` list.
pub(crate) fn map_headers<C: Copy + Eq + std::hash::Hash>(
    headers: &[Cell],
    resolver: impl Fn(&str) -> Option<C>,
) -> (HashMap<C, usize>, Vec<String>) {
    let mut mapping = HashMap::new();
    let mut unmapped = Vec::new();

    for (index, cell) in headers.iter().enumerate() {
        let Some(text) = cell.as_text() else { continue };
        match resolver(text) {
            Some(column) => {
                mapping.entry(column).or_insert(index);
            }
            None => unmapped.push(text.trim().to_string()),
        }
    }

    (mapping, unmapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_variants_resolve() {
        for header in ["Orig Balance", "original_balance", "OriginalBalance", "ORIG BAL"] {
            assert_eq!(
                resolve_tape_column(header),
                Some(TapeColumn::OriginalBalance),
                "header {:?}",
                header
            );
        }
    }

    #[test]
    fn test_required_tape_aliases() {
        assert_eq!(resolve_tape_column("Loan ID"), Some(TapeColumn::LoanId));
        assert_eq!(
            resolve_tape_column("Current Balance"),
            Some(TapeColumn::CurrentBalance)
        );
        assert_eq!(resolve_tape_column("Rate"), Some(TapeColumn::InterestRate));
        assert_eq!(resolve_tape_column("UPB"), Some(TapeColumn::CurrentBalance));
    }

    #[test]
    fn test_no_match_is_none() {
        assert_eq!(resolve_tape_column("Servicer Notes"), None);
        assert_eq!(resolve_history_column("Custodian"), None);
    }

    #[test]
    fn test_aliases_unique_across_columns() {
        // A squashed alias appearing under two *different* columns would make
        // resolution order-dependent
        fn assert_disjoint<C: Copy + PartialEq + std::fmt::Debug>(table: &[(C, &[&str])]) {
            let mut seen: std::collections::HashMap<String, C> = std::collections::HashMap::new();
            for (column, aliases) in table {
                for alias in *aliases {
                    if let Some(existing) = seen.insert(squash(alias), *column) {
                        assert_eq!(
                            existing, *column,
                            "alias {:?} is claimed by two columns",
                            alias
                        );
                    }
                }
            }
        }
        assert_disjoint(TAPE_ALIASES);
        assert_disjoint(HISTORY_ALIASES);
    }

    #[test]
    fn test_map_headers_reports_unmapped() {
        let headers = vec![
            Cell::Text("Loan ID".into()),
            Cell::Text("Servicer Notes".into()),
            Cell::Text("Current Balance".into()),
            Cell::Empty,
        ];
        let (mapping, unmapped) = map_headers(&headers, resolve_tape_column);
        assert_eq!(mapping.get(&TapeColumn::LoanId), Some(&0));
        assert_eq!(mapping.get(&TapeColumn::CurrentBalance), Some(&2));
        assert_eq!(unmapped, vec!["Servicer Notes".to_string()]);
    }

    #[test]
    fn test_first_header_wins_on_duplicates() {
        let headers = vec![
            Cell::Text("Balance".into()),
            Cell::Text("Current Balance".into()),
        ];
        let (mapping, _) = map_headers(&headers, resolve_tape_column);
        assert_eq!(mapping.get(&TapeColumn::CurrentBalance), Some(&0));
    }
}
