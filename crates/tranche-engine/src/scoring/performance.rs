//! Portfolio performance scoring: defaults, delinquency, and trend

use super::ScoringInput;
use crate::thresholds::*;
use serde_json::json;
use std::collections::BTreeMap;
use tranche_core::{Category, CategoryScore, PerformanceHistoryRecord};

pub(crate) fn score(input: &ScoringInput) -> CategoryScore {
    let m = input.metrics;

    let default_points = band_below(m.default_rate, DEFAULT_RATE_BANDS, DEFAULT_RATE_FLOOR);
    let total_delinquency = m.total_delinquency_rate();
    let delinquency_points = band_below(total_delinquency, DELINQUENCY_BANDS, DELINQUENCY_FLOOR);
    let (trend, trend_points) = default_trend(input.history);

    let mut details = BTreeMap::new();
    details.insert("default_rate".to_string(), json!(m.default_rate));
    details.insert("default_rate_points".to_string(), json!(default_points));
    details.insert("total_delinquency_rate".to_string(), json!(total_delinquency));
    details.insert("delinquency_points".to_string(), json!(delinquency_points));
    details.insert("trend".to_string(), json!(trend));
    details.insert("trend_points".to_string(), json!(trend_points));

    CategoryScore::new(
        Category::PortfolioPerformance,
        default_points + delinquency_points + trend_points,
        details,
    )
}

/// Classify the default-rate trend over the final three history periods.
/// Delta is last minus first of the window, in fraction terms.
fn default_trend(history: Option<&[PerformanceHistoryRecord]>) -> (&'static str, u32) {
    let series: Vec<f64> = history
        .map(|h| h.iter().filter_map(|r| r.pct_default).collect())
        .unwrap_or_default();

    if series.len() < 3 {
        return ("insufficient_history", TREND_NO_HISTORY_POINTS);
    }

    let window = &series[series.len() - 3..];
    let delta = window[2] - window[0];
    if delta < -TREND_STABLE_DELTA {
        ("improving", TREND_IMPROVING_POINTS)
    } else if delta <= TREND_STABLE_DELTA {
        ("stable", TREND_STABLE_POINTS)
    } else if delta <= TREND_DETERIORATING_DELTA {
        ("worsening", TREND_WORSENING_POINTS)
    } else {
        ("deteriorating", TREND_DETERIORATING_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tranche_core::{AssessmentOptions, PortfolioMetrics};

    fn month(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, n, 1).unwrap()
    }

    fn history_with_defaults(rates: &[f64]) -> Vec<PerformanceHistoryRecord> {
        rates
            .iter()
            .enumerate()
            .map(|(i, rate)| {
                let mut record = PerformanceHistoryRecord::new(month(i as u32 + 1));
                record.pct_default = Some(*rate);
                record
            })
            .collect()
    }

    fn run(metrics: &PortfolioMetrics, history: Option<&[PerformanceHistoryRecord]>) -> CategoryScore {
        let options = AssessmentOptions::default();
        let input = ScoringInput {
            metrics,
            records: &[],
            history,
            options: &options,
            as_of: month(6),
        };
        score(&input)
    }

    #[test]
    fn test_clean_portfolio_with_improving_trend() {
        let mut metrics = PortfolioMetrics::empty();
        metrics.default_rate = 0.005;
        metrics.delinquency_rate_30 = 0.01;
        let history = history_with_defaults(&[0.03, 0.02, 0.01]);

        let result = run(&metrics, Some(&history));
        // 40 (defaults) + 40 (delinquency) + 20 (improving) = 100
        assert_eq!(result.score, 100);
        assert_eq!(result.details["trend"], "improving");
    }

    #[test]
    fn test_no_history_scores_flat_trend_points() {
        let metrics = PortfolioMetrics::empty();
        let result = run(&metrics, None);
        assert_eq!(result.details["trend"], "insufficient_history");
        assert_eq!(result.details["trend_points"], 10);
    }

    #[test]
    fn test_trend_classifications() {
        let cases = [
            (vec![0.02, 0.02, 0.01], "improving"),
            (vec![0.02, 0.021, 0.022], "stable"),
            (vec![0.02, 0.03, 0.035], "worsening"),
            (vec![0.01, 0.03, 0.06], "deteriorating"),
        ];
        let metrics = PortfolioMetrics::empty();
        for (rates, expected) in cases {
            let history = history_with_defaults(&rates);
            let result = run(&metrics, Some(&history));
            assert_eq!(result.details["trend"], *expected, "rates {:?}", rates);
        }
    }

    #[test]
    fn test_trend_uses_final_three_periods() {
        // Early spike is ignored; the last three periods improve
        let history = history_with_defaults(&[0.10, 0.01, 0.05, 0.04, 0.02]);
        let metrics = PortfolioMetrics::empty();
        let result = run(&metrics, Some(&history));
        assert_eq!(result.details["trend"], "improving");
    }

    #[test]
    fn test_heavy_delinquency_floors() {
        let mut metrics = PortfolioMetrics::empty();
        metrics.default_rate = 0.15;
        metrics.delinquency_rate_30 = 0.08;
        metrics.delinquency_rate_60 = 0.05;
        metrics.delinquency_rate_90 = 0.03;

        let result = run(&metrics, None);
        // 10 + 10 + 10
        assert_eq!(result.score, 30);
    }
}
