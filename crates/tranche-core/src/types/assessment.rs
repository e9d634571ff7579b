//! The assessment result and its supporting enums

use super::flag::RedFlag;
use super::metrics::PortfolioMetrics;
use super::score::AssessmentScores;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completeness of the assessment. The engine only ever emits `preliminary`
/// (fewer than 6 months of performance history) or `complete`; states like
/// `processing` or `error` belong to the caller's workflow, not to the
/// calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentStatus {
    Preliminary,
    Complete,
}

/// Three-tier classification of whether the portfolio is suitable for
/// conversion into a tradable digital instrument without remediation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizationReadiness {
    Ready,
    Conditional,
    NotReady,
}

impl TokenizationReadiness {
    /// Fixed percentage split per tier: (ready, conditional, not_ready)
    pub fn split(&self) -> ReadinessSplit {
        match self {
            TokenizationReadiness::Ready => ReadinessSplit {
                ready: 100,
                conditional: 0,
                not_ready: 0,
            },
            TokenizationReadiness::Conditional => ReadinessSplit {
                ready: 70,
                conditional: 30,
                not_ready: 0,
            },
            TokenizationReadiness::NotReady => ReadinessSplit {
                ready: 30,
                conditional: 0,
                not_ready: 70,
            },
        }
    }

    /// Fixed timeline label per tier
    pub fn estimated_timeline(&self) -> &'static str {
        match self {
            TokenizationReadiness::Ready => "2-4 weeks",
            TokenizationReadiness::Conditional => "4-8 weeks",
            TokenizationReadiness::NotReady => "8+ weeks",
        }
    }
}

impl fmt::Display for TokenizationReadiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenizationReadiness::Ready => "ready",
            TokenizationReadiness::Conditional => "conditional",
            TokenizationReadiness::NotReady => "not_ready",
        };
        f.write_str(s)
    }
}

/// Percentage split across readiness tiers; always sums to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessSplit {
    pub ready: u8,
    pub conditional: u8,
    pub not_ready: u8,
}

/// Caller-supplied context that cannot be derived from the tape alone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentOptions {
    /// Supporting document package (operating statements, servicing
    /// agreements) has been provided alongside the tape
    pub has_supporting_documents: bool,
    /// Deal/SPV structure information has been provided
    pub has_structure_info: bool,
}

/// The engine's sole output entity, created once per scoring invocation and
/// immutable thereafter. Persistence is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub overall_score: u32,
    pub grade: String,
    pub status: AssessmentStatus,
    pub scores: AssessmentScores,
    pub metrics: PortfolioMetrics,
    pub red_flags: Vec<RedFlag>,
    pub readiness: TokenizationReadiness,
    pub readiness_split: ReadinessSplit,
    pub estimated_timeline: String,
    /// Narrative fields. The deterministic baseline is always present; an
    /// AI overlay may replace the summary and prepend to the lists, but
    /// never touches the numeric fields above.
    pub summary: String,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_constants_exact() {
        let ready = TokenizationReadiness::Ready.split();
        assert_eq!((ready.ready, ready.conditional, ready.not_ready), (100, 0, 0));

        let conditional = TokenizationReadiness::Conditional.split();
        assert_eq!(
            (conditional.ready, conditional.conditional, conditional.not_ready),
            (70, 30, 0)
        );

        let not_ready = TokenizationReadiness::NotReady.split();
        assert_eq!(
            (not_ready.ready, not_ready.conditional, not_ready.not_ready),
            (30, 0, 70)
        );
    }

    #[test]
    fn test_splits_sum_to_100() {
        for tier in [
            TokenizationReadiness::Ready,
            TokenizationReadiness::Conditional,
            TokenizationReadiness::NotReady,
        ] {
            let split = tier.split();
            let total = split.ready as u32 + split.conditional as u32 + split.not_ready as u32;
            assert_eq!(total, 100);
        }
    }

    #[test]
    fn test_timeline_labels() {
        assert_eq!(TokenizationReadiness::Ready.estimated_timeline(), "2-4 weeks");
        assert_eq!(
            TokenizationReadiness::Conditional.estimated_timeline(),
            "4-8 weeks"
        );
        assert_eq!(TokenizationReadiness::NotReady.estimated_timeline(), "8+ weeks");
    }

    #[test]
    fn test_readiness_serde() {
        assert_eq!(
            serde_json::to_string(&TokenizationReadiness::NotReady).unwrap(),
            "\"not_ready\""
        );
        assert_eq!(
            serde_json::to_string(&AssessmentStatus::Preliminary).unwrap(),
            "\"preliminary\""
        );
    }
}
