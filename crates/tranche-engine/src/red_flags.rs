//! Red-flag detection
//!
//! A fixed battery of independently evaluated rules. Every triggered rule
//! contributes one severity-tagged flag; rules are not mutually exclusive
//! and there is no deduplication beyond one flag per rule.

use crate::metrics::months_between;
use crate::thresholds::*;
use chrono::NaiveDate;
use serde_json::json;
use tranche_core::{
    FlagKind, LoanRecord, PaymentStatus, PerformanceHistoryRecord, PortfolioMetrics, RedFlag,
    Severity, FULL_HISTORY_MONTHS,
};

/// Run the full rule battery and collect every triggered flag.
pub fn detect_red_flags(
    metrics: &PortfolioMetrics,
    records: &[LoanRecord],
    history: Option<&[PerformanceHistoryRecord]>,
    as_of: NaiveDate,
) -> Vec<RedFlag> {
    let mut flags = Vec::new();

    if metrics.default_rate > FLAG_MAX_DEFAULT_RATE {
        flags.push(
            RedFlag::new(
                FlagKind::HighDefaultRate,
                Severity::High,
                format!(
                    "Default rate of {:.1}% exceeds the {:.0}% ceiling",
                    metrics.default_rate * 100.0,
                    FLAG_MAX_DEFAULT_RATE * 100.0
                ),
            )
            .with_details(json!({ "default_rate": metrics.default_rate })),
        );
    }

    let seriously_delinquent: Vec<&str> = records
        .iter()
        .filter(|r| {
            matches!(
                r.status(),
                PaymentStatus::NinetyDay | PaymentStatus::Default
            )
        })
        .map(|r| r.loan_id.as_str())
        .collect();
    if !seriously_delinquent.is_empty() {
        flags.push(
            RedFlag::new(
                FlagKind::SeriousDelinquency,
                Severity::High,
                format!(
                    "{} loan(s) are 90+ days delinquent or in default: {}",
                    seriously_delinquent.len(),
                    seriously_delinquent.join(", ")
                ),
            )
            .with_details(json!({ "loan_ids": seriously_delinquent })),
        );
    }

    if metrics.largest_exposure > FLAG_MAX_SINGLE_EXPOSURE {
        flags.push(
            RedFlag::new(
                FlagKind::ConcentrationRisk,
                Severity::High,
                format!(
                    "Largest single exposure is {:.1}% of the portfolio (limit {:.0}%)",
                    metrics.largest_exposure * 100.0,
                    FLAG_MAX_SINGLE_EXPOSURE * 100.0
                ),
            )
            .with_details(json!({ "largest_exposure": metrics.largest_exposure })),
        );
    }

    if metrics.weighted_avg_ltv > FLAG_MAX_WEIGHTED_LTV {
        flags.push(
            RedFlag::new(
                FlagKind::ElevatedLtv,
                Severity::Medium,
                format!(
                    "Weighted average LTV of {:.1}% exceeds {:.0}%",
                    metrics.weighted_avg_ltv, FLAG_MAX_WEIGHTED_LTV
                ),
            )
            .with_details(json!({ "weighted_avg_ltv": metrics.weighted_avg_ltv })),
        );
    }

    let thin_coverage: Vec<&str> = records
        .iter()
        .filter(|r| r.dscr.is_some_and(|d| d < FLAG_MIN_DSCR))
        .map(|r| r.loan_id.as_str())
        .collect();
    if !thin_coverage.is_empty() {
        flags.push(
            RedFlag::new(
                FlagKind::InsufficientDebtService,
                Severity::Medium,
                format!(
                    "{} loan(s) have DSCR below {:.1}x: {}",
                    thin_coverage.len(),
                    FLAG_MIN_DSCR,
                    thin_coverage.join(", ")
                ),
            )
            .with_details(json!({ "loan_ids": thin_coverage })),
        );
    }

    let stale_appraisals: Vec<&str> = records
        .iter()
        .filter(|r| {
            r.appraisal_date
                .is_some_and(|d| months_between(d, as_of) > FLAG_MAX_APPRAISAL_AGE_MONTHS)
        })
        .map(|r| r.loan_id.as_str())
        .collect();
    if !stale_appraisals.is_empty() {
        flags.push(
            RedFlag::new(
                FlagKind::StaleAppraisals,
                Severity::Medium,
                format!(
                    "{} loan(s) have appraisals older than {} months: {}",
                    stale_appraisals.len(),
                    FLAG_MAX_APPRAISAL_AGE_MONTHS,
                    stale_appraisals.join(", ")
                ),
            )
            .with_details(json!({ "loan_ids": stale_appraisals })),
        );
    }

    let history_months = history.map(|h| h.len()).unwrap_or(0);
    if history_months < FULL_HISTORY_MONTHS {
        flags.push(
            RedFlag::new(
                FlagKind::LimitedHistory,
                Severity::Low,
                format!(
                    "Only {} month(s) of performance history provided (minimum {})",
                    history_months, FULL_HISTORY_MONTHS
                ),
            )
            .with_details(json!({ "history_months": history_months })),
        );
    }

    tracing::debug!(flags = flags.len(), "red-flag battery evaluated");
    flags
}
