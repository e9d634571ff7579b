//! Parse report returned by every ingestion run

use serde::{Deserialize, Serialize};

/// Outcome of one ingestion run.
///
/// `success` is true iff at least one valid record was parsed. Structural
/// problems land in `errors`, recoverable row-level issues in `warnings`,
/// and headers with no alias match in `unmapped_columns`; none of them
/// abort the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseReport<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub unmapped_columns: Vec<String>,
}

impl<T> ParseReport<T> {
    pub fn new() -> Self {
        Self {
            success: false,
            data: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            unmapped_columns: Vec::new(),
        }
    }

    /// A run rejected before any rows were read (unreadable workbook,
    /// missing required columns)
    pub(crate) fn rejected(error: impl Into<String>) -> Self {
        let mut report = Self::new();
        report.errors.push(error.into());
        report
    }
}

impl<T> Default for ParseReport<T> {
    fn default() -> Self {
        Self::new()
    }
}
