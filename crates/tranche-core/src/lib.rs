//! TRANCHE Core - Core types and definitions for the TRANCHE assessment engine
//!
//! This crate provides the fundamental types used across the TRANCHE ecosystem:
//! - Loan tape and performance history records
//! - Derived portfolio metrics
//! - Category scores, red flags, and the assessment result
//! - Error types

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use types::{
    grade_for, AssessmentOptions, AssessmentResult, AssessmentScores, AssessmentStatus, Category,
    CategoryScore, FlagKind, LoanRecord, PaymentStatus, PerformanceHistoryRecord,
    PortfolioMetrics, ReadinessSplit, RedFlag, Severity, TokenizationReadiness,
    FULL_HISTORY_MONTHS,
};
