//! Cash flow quality scoring: coverage, current share, rate band

use super::ScoringInput;
use crate::thresholds::*;
use serde_json::json;
use std::collections::BTreeMap;
use tranche_core::{Category, CategoryScore};

pub(crate) fn score(input: &ScoringInput) -> CategoryScore {
    let m = input.metrics;

    let dscr_points = band_above(m.weighted_avg_dscr, DSCR_BANDS, DSCR_FLOOR);
    let current_points = band_above(m.current_rate, CURRENT_FRACTION_BANDS, CURRENT_FRACTION_FLOOR);
    let rate_points = competitive_rate_points(m.weighted_avg_rate);

    let mut details = BTreeMap::new();
    details.insert("weighted_avg_dscr".to_string(), json!(m.weighted_avg_dscr));
    details.insert("dscr_points".to_string(), json!(dscr_points));
    details.insert("current_rate".to_string(), json!(m.current_rate));
    details.insert("current_points".to_string(), json!(current_points));
    details.insert("weighted_avg_rate".to_string(), json!(m.weighted_avg_rate));
    details.insert("rate_points".to_string(), json!(rate_points));

    CategoryScore::new(
        Category::CashFlowQuality,
        dscr_points + current_points + rate_points,
        details,
    )
}

/// Full credit inside the competitive band, partial in the wider band,
/// minimal outside both.
fn competitive_rate_points(rate: f64) -> u32 {
    let (full_lo, full_hi) = RATE_FULL_BAND;
    let (partial_lo, partial_hi) = RATE_PARTIAL_BAND;
    if (full_lo..=full_hi).contains(&rate) {
        RATE_FULL_POINTS
    } else if (partial_lo..=partial_hi).contains(&rate) {
        RATE_PARTIAL_POINTS
    } else {
        RATE_MINIMAL_POINTS
    }
}
