//! Documentation scoring: tape completeness, history depth, supporting docs

use super::ScoringInput;
use crate::thresholds::*;
use serde_json::json;
use std::collections::BTreeMap;
use tranche_core::{Category, CategoryScore, LoanRecord};

/// Field labels of the completeness check: 4 required + 6 optional,
/// evaluated on a sample (first) record.
const CHECKED_FIELDS: usize = 10;

pub(crate) fn score(input: &ScoringInput) -> CategoryScore {
    let completed = input.records.first().map(completed_fields).unwrap_or(0);
    let completeness_points = completed as u32 * COMPLETENESS_POINTS_PER_FIELD;

    let history_months = input.history.map(|h| h.len()).unwrap_or(0);
    let history_points = if history_months == 0 {
        HISTORY_ABSENT_POINTS
    } else {
        band_above(
            history_months as f64,
            HISTORY_LENGTH_BANDS,
            HISTORY_ABSENT_POINTS,
        )
    };

    let docs_points = if input.options.has_supporting_documents {
        SUPPORTING_DOCS_POINTS
    } else {
        SUPPORTING_DOCS_FLOOR
    };

    let mut details = BTreeMap::new();
    details.insert(
        "fields_completed".to_string(),
        json!(format!("{}/{}", completed, CHECKED_FIELDS)),
    );
    details.insert("completeness_points".to_string(), json!(completeness_points));
    details.insert("history_months".to_string(), json!(history_months));
    details.insert("history_points".to_string(), json!(history_points));
    details.insert(
        "has_supporting_documents".to_string(),
        json!(input.options.has_supporting_documents),
    );
    details.insert("supporting_docs_points".to_string(), json!(docs_points));

    CategoryScore::new(
        Category::Documentation,
        completeness_points + history_points + docs_points,
        details,
    )
}

fn completed_fields(sample: &LoanRecord) -> usize {
    let checks = [
        // Required tape fields
        !sample.loan_id.trim().is_empty(),
        sample.current_balance > 0.0,
        sample.interest_rate.is_some(),
        sample.payment_status.is_some(),
        // Optional enrichment fields
        sample.origination_date.is_some(),
        sample.maturity_date.is_some(),
        sample.property_type.is_some(),
        sample.property_state.is_some(),
        sample.current_ltv.is_some(),
        sample.dscr.is_some(),
    ];
    checks.iter().filter(|present| **present).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tranche_core::{AssessmentOptions, PaymentStatus, PerformanceHistoryRecord, PortfolioMetrics};

    fn full_record() -> LoanRecord {
        let mut record = LoanRecord::new("L1", 100_000.0);
        record.interest_rate = Some(8.0);
        record.payment_status = Some(PaymentStatus::Current);
        record.origination_date = NaiveDate::from_ymd_opt(2023, 1, 1);
        record.maturity_date = NaiveDate::from_ymd_opt(2033, 1, 1);
        record.property_type = Some("Multifamily".to_string());
        record.property_state = Some("TX".to_string());
        record.current_ltv = Some(65.0);
        record.dscr = Some(1.4);
        record
    }

    fn months(n: usize) -> Vec<PerformanceHistoryRecord> {
        (0..n)
            .map(|i| {
                PerformanceHistoryRecord::new(
                    NaiveDate::from_ymd_opt(2022 + (i / 12) as i32, (i % 12) as u32 + 1, 1)
                        .unwrap(),
                )
            })
            .collect()
    }

    fn run(
        records: &[LoanRecord],
        history: Option<&[PerformanceHistoryRecord]>,
        options: AssessmentOptions,
    ) -> CategoryScore {
        let metrics = PortfolioMetrics::empty();
        let input = ScoringInput {
            metrics: &metrics,
            records,
            history,
            options: &options,
            as_of: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        score(&input)
    }

    #[test]
    fn test_complete_package_scores_full() {
        let records = vec![full_record()];
        let history = months(24);
        let options = AssessmentOptions {
            has_supporting_documents: true,
            has_structure_info: false,
        };
        let result = run(&records, Some(&history), options);
        // 40 + 40 + 20
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_minimal_tape_scores_low() {
        let mut record = LoanRecord::new("L1", 100_000.0);
        record.interest_rate = Some(8.0);
        let records = vec![record];
        let result = run(&records, None, AssessmentOptions::default());
        // 3 fields * 4 + 5 (no history) + 5 (no docs)
        assert_eq!(result.score, 22);
        assert_eq!(result.details["fields_completed"], "3/10");
    }

    #[test]
    fn test_history_length_bands() {
        let records = vec![full_record()];
        let cases = [(3usize, 10u32), (6, 20), (12, 30), (24, 40)];
        for (n, expected) in cases {
            let history = months(n);
            let result = run(&records, Some(&history), AssessmentOptions::default());
            assert_eq!(result.details["history_points"], expected, "{} months", n);
        }
    }

    #[test]
    fn test_empty_portfolio_scores_floors() {
        let result = run(&[], None, AssessmentOptions::default());
        assert_eq!(result.score, 10);
    }
}
