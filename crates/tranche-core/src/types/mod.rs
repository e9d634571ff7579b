//! Type definitions for the TRANCHE assessment engine

mod assessment;
mod flag;
mod history;
mod loan;
mod metrics;
mod score;

pub use assessment::{
    AssessmentOptions, AssessmentResult, AssessmentStatus, ReadinessSplit, TokenizationReadiness,
};
pub use flag::{FlagKind, RedFlag, Severity};
pub use history::{PerformanceHistoryRecord, FULL_HISTORY_MONTHS};
pub use loan::{LoanRecord, PaymentStatus};
pub use metrics::PortfolioMetrics;
pub use score::{grade_for, AssessmentScores, Category, CategoryScore};
