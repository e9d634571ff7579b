//! Collateral coverage scoring: LTV, lien seniority, appraisal freshness

use super::ScoringInput;
use crate::metrics::months_between;
use crate::thresholds::*;
use serde_json::json;
use std::collections::BTreeMap;
use tranche_core::{Category, CategoryScore};

pub(crate) fn score(input: &ScoringInput) -> CategoryScore {
    let m = input.metrics;

    // A weighted LTV of 0 means no record carried an LTV; that earns the
    // floor, not the best band.
    let ltv_points = if m.weighted_avg_ltv > 0.0 {
        band_below(m.weighted_avg_ltv, LTV_BANDS, LTV_FLOOR)
    } else {
        LTV_FLOOR
    };

    let (first_lien_fraction, lien_points) = first_lien(input);
    let (appraisal_age, appraisal_points) = appraisal_freshness(input);

    let mut details = BTreeMap::new();
    details.insert("weighted_avg_ltv".to_string(), json!(m.weighted_avg_ltv));
    details.insert("ltv_points".to_string(), json!(ltv_points));
    details.insert("first_lien_fraction".to_string(), json!(first_lien_fraction));
    details.insert("first_lien_points".to_string(), json!(lien_points));
    details.insert("avg_appraisal_age_months".to_string(), json!(appraisal_age));
    details.insert("appraisal_points".to_string(), json!(appraisal_points));

    CategoryScore::new(
        Category::CollateralCoverage,
        ltv_points + lien_points + appraisal_points,
        details,
    )
}

/// Share of records whose lien-position text reads as first lien. The
/// classification is a deliberately crude substring match ("first"/"1st"/"1")
/// over free text. Tapes without any lien text score the neutral midpoint.
fn first_lien(input: &ScoringInput) -> (Option<f64>, u32) {
    let with_lien: Vec<&str> = input
        .records
        .iter()
        .filter_map(|r| r.lien_position.as_deref())
        .collect();
    if with_lien.is_empty() {
        return (None, FIRST_LIEN_UNKNOWN_POINTS);
    }

    let first = with_lien
        .iter()
        .filter(|text| {
            let lower = text.to_lowercase();
            lower.contains("first") || lower.contains('1')
        })
        .count();
    let fraction = first as f64 / with_lien.len() as f64;
    (
        Some(fraction),
        band_above(fraction, FIRST_LIEN_BANDS, FIRST_LIEN_FLOOR),
    )
}

fn appraisal_freshness(input: &ScoringInput) -> (Option<f64>, u32) {
    let ages: Vec<i32> = input
        .records
        .iter()
        .filter_map(|r| r.appraisal_date)
        .map(|d| months_between(d, input.as_of).max(0))
        .collect();
    if ages.is_empty() {
        return (None, APPRAISAL_ABSENT_POINTS);
    }

    let avg = ages.iter().sum::<i32>() as f64 / ages.len() as f64;
    (
        Some(avg),
        band_below(avg, APPRAISAL_AGE_BANDS, APPRAISAL_AGE_FLOOR),
    )
}
