//! TRANCHE Assessment Engine SDK
//!
//! High-level API for running portfolio assessments: workbook bytes in,
//! [`AssessmentResult`] out, with the optional LLM narrative overlay wired
//! in at construction time.

pub mod assessment;
pub mod builder;
pub mod config;
pub mod error;

// Re-export main types
pub use assessment::{AssessmentEngine, AssessmentRequest, AssessmentResponse};
pub use builder::AssessmentEngineBuilder;
pub use config::{AssessmentConfig, NarrativeConfig, NarrativeProvider};
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use tranche_core::{
    AssessmentOptions, AssessmentResult, AssessmentStatus, LoanRecord, PaymentStatus,
    PerformanceHistoryRecord, PortfolioMetrics, RedFlag, Severity, TokenizationReadiness,
};
pub use tranche_ingest::ParseReport;
pub use tranche_llm::{Narrative, NarrativeContext, NarrativeGenerator};
