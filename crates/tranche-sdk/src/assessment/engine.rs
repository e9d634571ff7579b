//! Core AssessmentEngine implementation

use super::types::{AssessmentRequest, AssessmentResponse};
use crate::error::{Result, SdkError};
use std::sync::Arc;
use std::time::Instant;
use tranche_core::{AssessmentOptions, LoanRecord, PerformanceHistoryRecord};
use tranche_engine::assess_portfolio;
use tranche_ingest::{parse_loan_tape, parse_performance_history};
use tranche_llm::{apply_narrative, NarrativeContext, NarrativeGenerator};

/// High-level assessment engine: ingestion, deterministic scoring, and the
/// optional narrative overlay behind one call.
///
/// The engine holds no mutable state; one instance can serve concurrent
/// assessment runs.
pub struct AssessmentEngine {
    generator: Arc<dyn NarrativeGenerator>,
}

impl AssessmentEngine {
    pub(crate) fn new(generator: Arc<dyn NarrativeGenerator>) -> Self {
        Self { generator }
    }

    /// Name of the configured narrative generator ("noop" when disabled)
    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Generate a unique request ID
    /// Format: asmt_YYYYMMDDHHmmss_xxxxxx
    fn generate_request_id() -> String {
        use chrono::Utc;
        use rand::Rng;

        let datetime_str = Utc::now().format("%Y%m%d%H%M%S").to_string();
        let random: u32 = rand::thread_rng().gen_range(0..0xFFFFFF);
        format!("asmt_{}_{:06x}", datetime_str, random)
    }

    /// Assess a portfolio from workbook bytes.
    ///
    /// An unusable tape returns [`SdkError::TapeRejected`]. A history
    /// workbook that fails to parse only degrades the run: its errors
    /// become warnings and the assessment proceeds as preliminary.
    pub async fn assess(&self, request: AssessmentRequest) -> Result<AssessmentResponse> {
        let started = Instant::now();

        let tape_report = parse_loan_tape(&request.tape, &request.tape_filename);
        if !tape_report.success {
            return Err(SdkError::TapeRejected {
                errors: tape_report.errors,
            });
        }
        let mut warnings = tape_report.warnings;

        let mut history = None;
        if let Some(bytes) = &request.history {
            let filename = request
                .history_filename
                .as_deref()
                .unwrap_or("performance-history.xlsx");
            let history_report = parse_performance_history(bytes, filename);
            if history_report.success {
                warnings.extend(history_report.warnings);
                history = Some(history_report.data);
            } else {
                warnings.push(format!(
                    "performance history ignored: {}",
                    history_report.errors.join("; ")
                ));
            }
        }

        self.run(
            tape_report.data,
            history,
            request.options,
            warnings,
            tape_report.unmapped_columns,
            started,
        )
        .await
    }

    /// Assess already-normalized records, bypassing ingestion. Useful for
    /// callers that hold parsed data and for tests.
    pub async fn assess_records(
        &self,
        records: Vec<LoanRecord>,
        history: Option<Vec<PerformanceHistoryRecord>>,
        options: AssessmentOptions,
    ) -> Result<AssessmentResponse> {
        let started = Instant::now();
        self.run(records, history, options, Vec::new(), Vec::new(), started)
            .await
    }

    async fn run(
        &self,
        records: Vec<LoanRecord>,
        history: Option<Vec<PerformanceHistoryRecord>>,
        options: AssessmentOptions,
        warnings: Vec<String>,
        unmapped_columns: Vec<String>,
        started: Instant,
    ) -> Result<AssessmentResponse> {
        let request_id = Self::generate_request_id();
        let as_of = chrono::Utc::now().date_naive();

        let mut result = assess_portfolio(&records, history.as_deref(), &options, as_of);

        let context = NarrativeContext::from_result(&result);
        if let Some(narrative) = self.generator.analyze(&context).await {
            apply_narrative(&mut result, &narrative);
        }

        let processing_time_ms = started.elapsed().as_millis() as u64;
        tracing::info!(
            request_id = %request_id,
            overall_score = result.overall_score,
            readiness = %result.readiness,
            processing_time_ms,
            "assessment finished"
        );

        Ok(AssessmentResponse {
            request_id,
            result,
            processing_time_ms,
            warnings,
            unmapped_columns,
        })
    }
}
