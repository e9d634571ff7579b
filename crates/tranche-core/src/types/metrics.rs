//! Derived portfolio metrics

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable snapshot of normalized portfolio metrics, computed once per
/// assessment run.
///
/// All rate and fraction fields lie in [0, 1] **except** `weighted_avg_rate`
/// and `weighted_avg_ltv`, which are percentages (0-100) because the
/// category-scoring threshold tables are defined against the percent form.
/// That asymmetry is deliberate and must not be "fixed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Sum of current balances
    pub portfolio_size: f64,
    pub loan_count: usize,
    pub avg_loan_size: f64,

    /// Balance-weighted average interest rate, as a percentage
    pub weighted_avg_rate: f64,
    /// Balance-weighted average current LTV, as a percentage
    pub weighted_avg_ltv: f64,
    /// Balance-weighted average DSCR, as a decimal multiple
    pub weighted_avg_dscr: f64,

    /// Status distribution over non-paid-off loans, as fractions
    pub current_rate: f64,
    pub delinquency_rate_30: f64,
    pub delinquency_rate_60: f64,
    pub delinquency_rate_90: f64,
    pub default_rate: f64,

    pub avg_loan_age_months: f64,
    pub avg_remaining_term_months: f64,

    /// Largest single balance as a fraction of portfolio size
    pub largest_exposure: f64,
    /// Sum of the ten largest balances as a fraction of portfolio size
    pub top10_concentration: f64,

    /// Balance share by property state, fractions rounded to 3 decimals
    pub state_concentration: BTreeMap<String, f64>,
    /// Balance share by property type, fractions rounded to 3 decimals
    pub property_type_concentration: BTreeMap<String, f64>,
}

impl PortfolioMetrics {
    /// Metrics for an empty portfolio: every field is zero, never NaN
    pub fn empty() -> Self {
        Self {
            portfolio_size: 0.0,
            loan_count: 0,
            avg_loan_size: 0.0,
            weighted_avg_rate: 0.0,
            weighted_avg_ltv: 0.0,
            weighted_avg_dscr: 0.0,
            current_rate: 0.0,
            delinquency_rate_30: 0.0,
            delinquency_rate_60: 0.0,
            delinquency_rate_90: 0.0,
            default_rate: 0.0,
            avg_loan_age_months: 0.0,
            avg_remaining_term_months: 0.0,
            largest_exposure: 0.0,
            top10_concentration: 0.0,
            state_concentration: BTreeMap::new(),
            property_type_concentration: BTreeMap::new(),
        }
    }

    /// Combined 30/60/90-day delinquency, as a fraction
    pub fn total_delinquency_rate(&self) -> f64 {
        self.delinquency_rate_30 + self.delinquency_rate_60 + self.delinquency_rate_90
    }
}

impl Default for PortfolioMetrics {
    fn default() -> Self {
        Self::empty()
    }
}
