//! Request/Response types for the assessment engine

use serde::{Deserialize, Serialize};
use tranche_core::{AssessmentOptions, AssessmentResult};

/// One assessment request: a loan tape workbook plus optional monthly
/// performance history.
#[derive(Debug, Clone)]
pub struct AssessmentRequest {
    /// Raw loan tape workbook bytes (.xlsx/.xls)
    pub tape: Vec<u8>,

    /// Filename hint for sheet selection and diagnostics
    pub tape_filename: String,

    /// Optional performance history workbook bytes
    pub history: Option<Vec<u8>>,

    /// Filename hint for the history workbook
    pub history_filename: Option<String>,

    /// Caller-supplied context flags
    pub options: AssessmentOptions,
}

impl AssessmentRequest {
    /// Create a request for a loan tape
    pub fn new(tape: Vec<u8>, tape_filename: impl Into<String>) -> Self {
        Self {
            tape,
            tape_filename: tape_filename.into(),
            history: None,
            history_filename: None,
            options: AssessmentOptions::default(),
        }
    }

    /// Attach a performance history workbook
    pub fn with_history(mut self, bytes: Vec<u8>, filename: impl Into<String>) -> Self {
        self.history = Some(bytes);
        self.history_filename = Some(filename.into());
        self
    }

    /// Set assessment options
    pub fn with_options(mut self, options: AssessmentOptions) -> Self {
        self.options = options;
        self
    }
}

/// Assessment response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    /// Request ID (for tracking and correlation)
    pub request_id: String,

    /// The assessment result
    pub result: AssessmentResult,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Row-level ingestion warnings, surfaced for end users
    pub warnings: Vec<String>,

    /// Tape headers that matched no known column alias
    pub unmapped_columns: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = AssessmentRequest::new(vec![1, 2, 3], "tape.xlsx")
            .with_history(vec![4, 5], "history.xlsx")
            .with_options(AssessmentOptions {
                has_supporting_documents: true,
                has_structure_info: false,
            });

        assert_eq!(request.tape_filename, "tape.xlsx");
        assert_eq!(request.history.as_deref(), Some(&[4u8, 5][..]));
        assert!(request.options.has_supporting_documents);
    }
}
