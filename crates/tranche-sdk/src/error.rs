//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The loan tape could not be used at all. Individual bad rows only
    /// produce warnings; this fires when ingestion yields zero usable
    /// records or the required columns are missing.
    #[error("Loan tape rejected: {}", .errors.join("; "))]
    TapeRejected { errors: Vec<String> },
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tape_rejected_lists_all_errors() {
        let error = SdkError::TapeRejected {
            errors: vec![
                "missing required columns: interest rate".to_string(),
                "no valid loan records parsed from tape".to_string(),
            ],
        };
        let text = error.to_string();
        assert!(text.contains("interest rate"));
        assert!(text.contains("no valid loan records"));
    }

    #[test]
    fn test_config_error_display() {
        let error = SdkError::ConfigError("narrative model not set".to_string());
        assert!(error.to_string().contains("Configuration error"));
    }
}
