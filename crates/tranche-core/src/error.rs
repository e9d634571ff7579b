//! Error types for TRANCHE Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown payment status: {0}")]
    UnknownPaymentStatus(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
