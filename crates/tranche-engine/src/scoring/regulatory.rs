//! Regulatory readiness scoring
//!
//! Intentionally coarse: deal-structure information is not derivable from
//! the tape, so this category is a caller-supplied binary pending richer
//! inputs.

use super::ScoringInput;
use crate::thresholds::{NO_STRUCTURE_INFO_POINTS, STRUCTURE_INFO_POINTS};
use serde_json::json;
use std::collections::BTreeMap;
use tranche_core::{Category, CategoryScore};

pub(crate) fn score(input: &ScoringInput) -> CategoryScore {
    let points = if input.options.has_structure_info {
        STRUCTURE_INFO_POINTS
    } else {
        NO_STRUCTURE_INFO_POINTS
    };

    let mut details = BTreeMap::new();
    details.insert(
        "has_structure_info".to_string(),
        json!(input.options.has_structure_info),
    );

    CategoryScore::new(Category::RegulatoryReadiness, points, details)
}
