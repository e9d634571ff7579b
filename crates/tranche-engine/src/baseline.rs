//! Deterministic baseline narrative
//!
//! Always generated from score and metric thresholds, whether or not an
//! AI overlay runs afterwards. The overlay may prepend to these lists but
//! never removes the baseline's existence.

use tranche_core::{
    AssessmentScores, Category, FlagKind, PortfolioMetrics, RedFlag, Severity,
    TokenizationReadiness, FULL_HISTORY_MONTHS,
};

/// Category scores at or above this produce a canned strength sentence
const STRENGTH_SCORE: u32 = 80;
/// Category scores below this produce a canned concern sentence
const CONCERN_SCORE: u32 = 60;

#[derive(Debug, Clone)]
pub struct Baseline {
    pub summary: String,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

pub fn build_baseline(
    scores: &AssessmentScores,
    metrics: &PortfolioMetrics,
    red_flags: &[RedFlag],
    readiness: TokenizationReadiness,
    history_months: usize,
) -> Baseline {
    let overall = scores.overall_score();
    let summary = format!(
        "Portfolio of {} loans totaling ${:.0} scored {}/100 ({}); tokenization readiness: {}.",
        metrics.loan_count,
        metrics.portfolio_size,
        overall,
        tranche_core::grade_for(overall),
        readiness
    );

    let mut strengths = Vec::new();
    let mut concerns = Vec::new();
    for score in scores.all() {
        if score.score >= STRENGTH_SCORE {
            if let Some(text) = strength_sentence(score.category, metrics) {
                strengths.push(text);
            }
        } else if score.score < CONCERN_SCORE {
            concerns.push(concern_sentence(score.category, metrics));
        }
    }
    if history_months < FULL_HISTORY_MONTHS {
        concerns.push(format!(
            "Only {} month(s) of performance history available; assessment is preliminary",
            history_months
        ));
    }

    Baseline {
        summary,
        strengths,
        concerns,
        recommendations: recommendations(red_flags, readiness),
    }
}

fn strength_sentence(category: Category, m: &PortfolioMetrics) -> Option<String> {
    let text = match category {
        Category::PortfolioPerformance => format!(
            "Strong portfolio performance with a default rate of {:.1}% and {:.1}% of loans current",
            m.default_rate * 100.0,
            m.current_rate * 100.0
        ),
        Category::CashFlowQuality => format!(
            "Healthy debt service coverage averaging {:.2}x",
            m.weighted_avg_dscr
        ),
        Category::Documentation => {
            "Well-documented loan tape with supporting performance history".to_string()
        }
        Category::CollateralCoverage => format!(
            "Conservative collateral position with a weighted LTV of {:.1}%",
            m.weighted_avg_ltv
        ),
        Category::Diversification => format!(
            "Diversified exposure across {} state(s) and {} property type(s)",
            m.state_concentration.len(),
            m.property_type_concentration.len()
        ),
        // The regulatory category is a coarse placeholder; no strength claim
        Category::RegulatoryReadiness => return None,
    };
    Some(text)
}

fn concern_sentence(category: Category, m: &PortfolioMetrics) -> String {
    match category {
        Category::PortfolioPerformance => format!(
            "Elevated credit stress: {:.1}% default rate and {:.1}% total delinquency",
            m.default_rate * 100.0,
            m.total_delinquency_rate() * 100.0
        ),
        Category::CashFlowQuality => format!(
            "Weak cash flow coverage averaging {:.2}x",
            m.weighted_avg_dscr
        ),
        Category::Documentation => {
            "Loan tape is missing fields needed for full diligence".to_string()
        }
        Category::CollateralCoverage => format!(
            "Thin collateral cushion with a weighted LTV of {:.1}%",
            m.weighted_avg_ltv
        ),
        Category::Diversification => format!(
            "Concentrated portfolio; largest exposure is {:.1}% of total",
            m.largest_exposure * 100.0
        ),
        Category::RegulatoryReadiness => {
            "Deal structure information has not been provided".to_string()
        }
    }
}

fn recommendations(red_flags: &[RedFlag], readiness: TokenizationReadiness) -> Vec<String> {
    let mut recs = Vec::new();
    let has = |kind: FlagKind| red_flags.iter().any(|f| f.kind == kind);

    if red_flags.iter().any(|f| f.severity == Severity::High) {
        recs.push("Resolve high-severity findings before proceeding to tokenization".to_string());
    }
    if has(FlagKind::SeriousDelinquency) {
        recs.push("Work out or remove seriously delinquent loans from the pool".to_string());
    }
    if has(FlagKind::ElevatedLtv) || has(FlagKind::StaleAppraisals) {
        recs.push("Obtain updated appraisals to support current collateral values".to_string());
    }
    if has(FlagKind::InsufficientDebtService) {
        recs.push("Address loans with debt service coverage below 1.0x".to_string());
    }
    if has(FlagKind::ConcentrationRisk) {
        recs.push("Reduce single-name concentration below 20% of the pool".to_string());
    }
    if has(FlagKind::LimitedHistory) {
        recs.push(format!(
            "Accumulate at least {} months of monthly performance history",
            FULL_HISTORY_MONTHS
        ));
    }
    if recs.is_empty() && readiness == TokenizationReadiness::Ready {
        recs.push("Proceed to deal structuring and investor documentation".to_string());
    }
    if recs.is_empty() {
        recs.push("Address flagged conditions to reach full readiness".to_string());
    }
    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tranche_core::CategoryScore;

    fn scores(points: [u32; 6]) -> AssessmentScores {
        let make = |category, p| CategoryScore::new(category, p, BTreeMap::new());
        AssessmentScores {
            portfolio_performance: make(Category::PortfolioPerformance, points[0]),
            cash_flow_quality: make(Category::CashFlowQuality, points[1]),
            documentation: make(Category::Documentation, points[2]),
            collateral_coverage: make(Category::CollateralCoverage, points[3]),
            diversification: make(Category::Diversification, points[4]),
            regulatory_readiness: make(Category::RegulatoryReadiness, points[5]),
        }
    }

    #[test]
    fn test_strengths_reference_live_metrics() {
        let mut metrics = PortfolioMetrics::empty();
        metrics.weighted_avg_dscr = 1.52;
        metrics.default_rate = 0.004;

        let baseline = build_baseline(
            &scores([90, 85, 40, 40, 40, 60]),
            &metrics,
            &[],
            TokenizationReadiness::Conditional,
            12,
        );
        assert!(baseline
            .strengths
            .iter()
            .any(|s| s.contains("1.52x")), "{:?}", baseline.strengths);
        assert!(baseline.strengths.iter().any(|s| s.contains("0.4%")));
        // Categories under 60 produce concerns
        assert_eq!(baseline.concerns.len(), 3);
    }

    #[test]
    fn test_limited_history_concern_and_recommendation() {
        let metrics = PortfolioMetrics::empty();
        let flags = vec![RedFlag::new(
            FlagKind::LimitedHistory,
            Severity::Low,
            "short",
        )];
        let baseline = build_baseline(
            &scores([70, 70, 70, 70, 70, 60]),
            &metrics,
            &flags,
            TokenizationReadiness::Conditional,
            3,
        );
        assert!(baseline.concerns.iter().any(|c| c.contains("3 month")));
        assert!(baseline
            .recommendations
            .iter()
            .any(|r| r.contains("6 months")));
    }

    #[test]
    fn test_clean_ready_portfolio_recommends_proceeding() {
        let metrics = PortfolioMetrics::empty();
        let baseline = build_baseline(
            &scores([90, 90, 90, 90, 90, 80]),
            &metrics,
            &[],
            TokenizationReadiness::Ready,
            12,
        );
        assert_eq!(baseline.concerns.len(), 0);
        assert_eq!(
            baseline.recommendations,
            vec!["Proceed to deal structuring and investor documentation".to_string()]
        );
    }

    #[test]
    fn test_summary_embeds_overall_grade() {
        let mut metrics = PortfolioMetrics::empty();
        metrics.loan_count = 42;
        metrics.portfolio_size = 10_500_000.0;
        let baseline = build_baseline(
            &scores([90, 90, 90, 90, 90, 80]),
            &metrics,
            &[],
            TokenizationReadiness::Ready,
            12,
        );
        assert!(baseline.summary.contains("42 loans"));
        assert!(baseline.summary.contains("ready"));
    }
}
