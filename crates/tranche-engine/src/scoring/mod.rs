//! Category scoring
//!
//! Six independent scoring functions share one immutable [`ScoringInput`].
//! The `Category -> ScorerFn` table keeps dispatch data-driven; adding a
//! seventh category means adding a module and one match arm.

mod cash_flow;
mod collateral;
mod diversification;
mod documentation;
mod performance;
mod regulatory;

use chrono::NaiveDate;
use tranche_core::{
    AssessmentOptions, AssessmentScores, Category, CategoryScore, LoanRecord,
    PerformanceHistoryRecord, PortfolioMetrics,
};

/// Everything a category scorer may consult. All references; scorers are
/// pure functions over this snapshot.
pub struct ScoringInput<'a> {
    pub metrics: &'a PortfolioMetrics,
    pub records: &'a [LoanRecord],
    /// Sorted ascending by period
    pub history: Option<&'a [PerformanceHistoryRecord]>,
    pub options: &'a AssessmentOptions,
    pub as_of: NaiveDate,
}

/// A pure category scorer
pub type ScorerFn = for<'a> fn(&ScoringInput<'a>) -> CategoryScore;

/// Look up the scorer for a category
pub fn scorer_for(category: Category) -> ScorerFn {
    match category {
        Category::PortfolioPerformance => performance::score,
        Category::CashFlowQuality => cash_flow::score,
        Category::Documentation => documentation::score,
        Category::CollateralCoverage => collateral::score,
        Category::Diversification => diversification::score,
        Category::RegulatoryReadiness => regulatory::score,
    }
}

/// Run all six scorers against one input
pub fn score_all(input: &ScoringInput) -> AssessmentScores {
    let run = |category: Category| scorer_for(category)(input);
    AssessmentScores {
        portfolio_performance: run(Category::PortfolioPerformance),
        cash_flow_quality: run(Category::CashFlowQuality),
        documentation: run(Category::Documentation),
        collateral_coverage: run(Category::CollateralCoverage),
        diversification: run(Category::Diversification),
        regulatory_readiness: run(Category::RegulatoryReadiness),
    }
}
