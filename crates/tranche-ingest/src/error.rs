//! Ingestion error types
//!
//! These errors are internal to the crate: the public parse functions catch
//! them and fold them into the in-band `errors` list of the parse report.

use thiserror::Error;

/// Ingestion error
#[derive(Error, Debug)]
pub enum IngestError {
    /// The workbook bytes could not be opened by the spreadsheet reader
    #[error("failed to read workbook '{file}': {source}")]
    Workbook {
        file: String,
        #[source]
        source: calamine::Error,
    },

    /// The workbook contains no sheets at all
    #[error("workbook '{0}' contains no sheets")]
    NoSheets(String),

    /// The selected sheet could not be loaded
    #[error("failed to load sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// Result type for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;
