//! TRANCHE Engine - Deterministic portfolio assessment
//!
//! A pure, synchronous computation pipeline: normalized loan records
//! (+ optional monthly history) are reduced to a [`PortfolioMetrics`]
//! snapshot, scored across six weighted categories, checked against a fixed
//! battery of red-flag rules, and assembled into an [`AssessmentResult`]
//! with a tokenization-readiness tier and baseline narrative.
//!
//! There is no I/O and no shared state anywhere in this crate; every
//! function is safe to invoke repeatedly and in parallel across independent
//! assessment runs.
//!
//! [`PortfolioMetrics`]: tranche_core::PortfolioMetrics
//! [`AssessmentResult`]: tranche_core::AssessmentResult

pub mod aggregate;
pub mod baseline;
pub mod metrics;
pub mod red_flags;
pub mod scoring;
pub mod thresholds;

// Re-export main entry points
pub use aggregate::{assess_portfolio, readiness_for};
pub use metrics::calculate_portfolio_metrics;
pub use red_flags::detect_red_flags;
pub use scoring::{score_all, scorer_for, ScoringInput};
