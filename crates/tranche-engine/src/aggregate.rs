//! Assessment aggregation
//!
//! Combines metrics, category scores, and red flags into the final
//! [`AssessmentResult`], including the tokenization-readiness tier and the
//! baseline narrative.

use crate::baseline::build_baseline;
use crate::metrics::calculate_portfolio_metrics;
use crate::red_flags::detect_red_flags;
use crate::scoring::{score_all, ScoringInput};
use chrono::NaiveDate;
use tranche_core::{
    grade_for, AssessmentOptions, AssessmentResult, AssessmentStatus, LoanRecord,
    PerformanceHistoryRecord, RedFlag, Severity, TokenizationReadiness, FULL_HISTORY_MONTHS,
};

/// The threshold below which an otherwise clean portfolio is only
/// conditionally ready.
const CONDITIONAL_SCORE_FLOOR: u32 = 70;

/// Run the full deterministic pipeline over normalized records.
///
/// Pure function: same inputs (including `as_of`) always produce the same
/// result. History is re-sorted defensively; callers are not trusted to
/// have done it.
pub fn assess_portfolio(
    records: &[LoanRecord],
    history: Option<&[PerformanceHistoryRecord]>,
    options: &AssessmentOptions,
    as_of: NaiveDate,
) -> AssessmentResult {
    let sorted_history: Option<Vec<PerformanceHistoryRecord>> = history.map(|h| {
        let mut sorted = h.to_vec();
        sorted.sort_by_key(|r| r.period);
        sorted
    });
    let history = sorted_history.as_deref();
    let history_months = history.map(|h| h.len()).unwrap_or(0);

    let metrics = calculate_portfolio_metrics(records, as_of);
    let scores = score_all(&ScoringInput {
        metrics: &metrics,
        records,
        history,
        options,
        as_of,
    });
    let red_flags = detect_red_flags(&metrics, records, history, as_of);

    let overall_score = scores.overall_score();
    let readiness = readiness_for(overall_score, &red_flags);
    let status = if history_months >= FULL_HISTORY_MONTHS {
        AssessmentStatus::Complete
    } else {
        AssessmentStatus::Preliminary
    };

    let baseline = build_baseline(&scores, &metrics, &red_flags, readiness, history_months);

    tracing::info!(
        overall_score,
        readiness = %readiness,
        red_flags = red_flags.len(),
        "portfolio assessed"
    );

    AssessmentResult {
        overall_score,
        grade: grade_for(overall_score).to_string(),
        status,
        scores,
        metrics,
        red_flags,
        readiness,
        readiness_split: readiness.split(),
        estimated_timeline: readiness.estimated_timeline().to_string(),
        summary: baseline.summary,
        strengths: baseline.strengths,
        concerns: baseline.concerns,
        recommendations: baseline.recommendations,
    }
}

/// Readiness tier: any high-severity flag forces `not_ready` regardless of
/// score; any medium flag or a sub-70 score is `conditional`; otherwise
/// `ready`.
pub fn readiness_for(overall_score: u32, red_flags: &[RedFlag]) -> TokenizationReadiness {
    if red_flags.iter().any(|f| f.severity == Severity::High) {
        TokenizationReadiness::NotReady
    } else if red_flags.iter().any(|f| f.severity == Severity::Medium)
        || overall_score < CONDITIONAL_SCORE_FLOOR
    {
        TokenizationReadiness::Conditional
    } else {
        TokenizationReadiness::Ready
    }
}
