//! Diversification scoring: exposure concentration and spread

use super::ScoringInput;
use crate::thresholds::*;
use serde_json::json;
use std::collections::BTreeMap;
use tranche_core::{Category, CategoryScore};

pub(crate) fn score(input: &ScoringInput) -> CategoryScore {
    let m = input.metrics;

    let exposure_points = band_below(m.largest_exposure, LARGEST_EXPOSURE_BANDS, LARGEST_EXPOSURE_FLOOR);
    let top10_points = band_below(m.top10_concentration, TOP10_BANDS, TOP10_FLOOR);

    let state_count = m.state_concentration.len();
    let state_points = band_above(state_count as f64, STATE_COUNT_BANDS, STATE_COUNT_FLOOR);

    let type_count = m.property_type_concentration.len();
    let type_points = band_above(
        type_count as f64,
        PROPERTY_TYPE_COUNT_BANDS,
        PROPERTY_TYPE_COUNT_FLOOR,
    );

    let mut details = BTreeMap::new();
    details.insert("largest_exposure".to_string(), json!(m.largest_exposure));
    details.insert("largest_exposure_points".to_string(), json!(exposure_points));
    details.insert("top10_concentration".to_string(), json!(m.top10_concentration));
    details.insert("top10_points".to_string(), json!(top10_points));
    details.insert("state_count".to_string(), json!(state_count));
    details.insert("state_points".to_string(), json!(state_points));
    details.insert("property_type_count".to_string(), json!(type_count));
    details.insert("property_type_points".to_string(), json!(type_points));

    CategoryScore::new(
        Category::Diversification,
        exposure_points + top10_points + state_points + type_points,
        details,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tranche_core::{AssessmentOptions, PortfolioMetrics};

    fn run(metrics: &PortfolioMetrics) -> CategoryScore {
        let options = AssessmentOptions::default();
        let input = ScoringInput {
            metrics,
            records: &[],
            history: None,
            options: &options,
            as_of: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        score(&input)
    }

    fn spread(keys: usize) -> std::collections::BTreeMap<String, f64> {
        (0..keys)
            .map(|i| (format!("K{}", i), 1.0 / keys as f64))
            .collect()
    }

    #[test]
    fn test_granular_diversified_pool_scores_full() {
        let mut metrics = PortfolioMetrics::empty();
        metrics.largest_exposure = 0.02;
        metrics.top10_concentration = 0.15;
        metrics.state_concentration = spread(12);
        metrics.property_type_concentration = spread(5);

        let result = run(&metrics);
        // 30 + 30 + 20 + 20
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_concentrated_pool_floors() {
        let mut metrics = PortfolioMetrics::empty();
        metrics.largest_exposure = 0.35;
        metrics.top10_concentration = 0.95;
        metrics.state_concentration = spread(1);
        metrics.property_type_concentration = spread(1);

        let result = run(&metrics);
        // 5 + 5 + 5 + 5
        assert_eq!(result.score, 20);
    }

    #[test]
    fn test_band_edges() {
        let mut metrics = PortfolioMetrics::empty();
        metrics.largest_exposure = 0.10;
        metrics.top10_concentration = 0.50;
        metrics.state_concentration = spread(5);
        metrics.property_type_concentration = spread(3);

        let result = run(&metrics);
        assert_eq!(result.details["largest_exposure_points"], 20);
        assert_eq!(result.details["top10_points"], 20);
        assert_eq!(result.details["state_points"], 15);
        assert_eq!(result.details["property_type_points"], 15);
    }
}
