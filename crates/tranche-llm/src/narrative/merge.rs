//! Additive merge of AI narrative onto the deterministic baseline
//!
//! AI-authored items come first; a baseline item is appended only when no
//! AI item already covers it, judged by a crude case-insensitive check on
//! the baseline item's leading characters. Each merged list is capped.
//! The policy is lossy and order-sensitive on purpose - output parity
//! matters more than elegance here.

use super::Narrative;
use tranche_core::AssessmentResult;

/// Merged lists never exceed this many entries
const MERGE_CAP: usize = 6;
/// Number of leading characters of a baseline item used for dedup
const DEDUP_PREFIX_CHARS: usize = 20;

/// Overlay an AI narrative onto a result. Lists merge additively, the AI
/// summary replaces the baseline sentence when present, and numeric fields
/// are never touched.
pub fn apply_narrative(result: &mut AssessmentResult, narrative: &Narrative) {
    if let Some(summary) = &narrative.summary {
        if !summary.trim().is_empty() {
            result.summary = summary.clone();
        }
    }
    result.strengths = merge_items(&narrative.strengths, &result.strengths);
    result.concerns = merge_items(&narrative.concerns, &result.concerns);
    result.recommendations = merge_items(&narrative.recommendations, &result.recommendations);
}

/// Merge AI items (first) with baseline items (appended when not covered),
/// capped at [`MERGE_CAP`] entries.
pub fn merge_items(ai: &[String], baseline: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = ai.to_vec();
    let ai_lower: Vec<String> = ai.iter().map(|s| s.to_lowercase()).collect();

    for item in baseline {
        let prefix: String = item.to_lowercase().chars().take(DEDUP_PREFIX_CHARS).collect();
        let covered = ai_lower.iter().any(|a| a.contains(&prefix));
        if !covered {
            merged.push(item.clone());
        }
    }

    merged.truncate(MERGE_CAP);
    merged
}
