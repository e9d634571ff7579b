//! Category scoring types and the grade table

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The six scored assessment categories, with fixed contribution weights
/// summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PortfolioPerformance,
    CashFlowQuality,
    Documentation,
    CollateralCoverage,
    Diversification,
    RegulatoryReadiness,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::PortfolioPerformance,
        Category::CashFlowQuality,
        Category::Documentation,
        Category::CollateralCoverage,
        Category::Diversification,
        Category::RegulatoryReadiness,
    ];

    /// Fixed contribution weight
    pub fn weight(&self) -> f64 {
        match self {
            Category::PortfolioPerformance => 0.25,
            Category::CashFlowQuality => 0.25,
            Category::Documentation => 0.20,
            Category::CollateralCoverage => 0.15,
            Category::Diversification => 0.10,
            Category::RegulatoryReadiness => 0.05,
        }
    }

    /// Stable snake_case key, matching the serde representation
    pub fn key(&self) -> &'static str {
        match self {
            Category::PortfolioPerformance => "portfolio_performance",
            Category::CashFlowQuality => "cash_flow_quality",
            Category::Documentation => "documentation",
            Category::CollateralCoverage => "collateral_coverage",
            Category::Diversification => "diversification",
            Category::RegulatoryReadiness => "regulatory_readiness",
        }
    }

    /// Resolve a snake_case key back to a category (e.g. for persisted
    /// score rows)
    pub fn from_key(key: &str) -> Result<Self, crate::error::CoreError> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| crate::error::CoreError::UnknownCategory(key.to_string()))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::PortfolioPerformance => "Portfolio Performance",
            Category::CashFlowQuality => "Cash Flow Quality",
            Category::Documentation => "Documentation",
            Category::CollateralCoverage => "Collateral Coverage",
            Category::Diversification => "Diversification",
            Category::RegulatoryReadiness => "Regulatory Readiness",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Letter grade for a 0-100 score. A single fixed step table applied
/// uniformly to category scores and the overall score.
pub fn grade_for(score: u32) -> &'static str {
    match score {
        95..=u32::MAX => "A",
        90..=94 => "A-",
        85..=89 => "B+",
        80..=84 => "B",
        75..=79 => "B-",
        70..=74 => "C+",
        65..=69 => "C",
        60..=64 => "C-",
        50..=59 => "D",
        _ => "F",
    }
}

/// Score for one category: raw 0-100 points, letter grade, fixed weight and
/// the weighted contribution, plus a details map for audit/explainability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u32,
    pub grade: String,
    pub weight: f64,
    pub weighted_score: f64,
    pub details: BTreeMap<String, serde_json::Value>,
}

impl CategoryScore {
    /// Build a score for a category; grade, weight, and weighted score are
    /// derived, the raw score is clamped to 100.
    pub fn new(
        category: Category,
        score: u32,
        details: BTreeMap<String, serde_json::Value>,
    ) -> Self {
        let score = score.min(100);
        Self {
            category,
            score,
            grade: grade_for(score).to_string(),
            weight: category.weight(),
            weighted_score: score as f64 * category.weight(),
            details,
        }
    }
}

/// The six category scores of one assessment run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentScores {
    pub portfolio_performance: CategoryScore,
    pub cash_flow_quality: CategoryScore,
    pub documentation: CategoryScore,
    pub collateral_coverage: CategoryScore,
    pub diversification: CategoryScore,
    pub regulatory_readiness: CategoryScore,
}

impl AssessmentScores {
    pub fn all(&self) -> [&CategoryScore; 6] {
        [
            &self.portfolio_performance,
            &self.cash_flow_quality,
            &self.documentation,
            &self.collateral_coverage,
            &self.diversification,
            &self.regulatory_readiness,
        ]
    }

    pub fn get(&self, category: Category) -> &CategoryScore {
        match category {
            Category::PortfolioPerformance => &self.portfolio_performance,
            Category::CashFlowQuality => &self.cash_flow_quality,
            Category::Documentation => &self.documentation,
            Category::CollateralCoverage => &self.collateral_coverage,
            Category::Diversification => &self.diversification,
            Category::RegulatoryReadiness => &self.regulatory_readiness,
        }
    }

    /// Overall score: rounded sum of the weighted category contributions
    pub fn overall_score(&self) -> u32 {
        let sum: f64 = self.all().iter().map(|s| s.weighted_score).sum();
        sum.round() as u32
    }
}
