//! Red-flag types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a red flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        f.write_str(s)
    }
}

/// One flag kind per detector rule; at most one flag fires per kind and run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    HighDefaultRate,
    SeriousDelinquency,
    ConcentrationRisk,
    ElevatedLtv,
    InsufficientDebtService,
    StaleAppraisals,
    LimitedHistory,
}

/// A rule-triggered condition surfaced alongside the numeric score to
/// explain risk drivers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedFlag {
    pub kind: FlagKind,
    pub severity: Severity,
    /// Human-readable message with embedded computed values
    pub message: String,
    /// Traceability payload (offending loan IDs, measured values)
    pub details: serde_json::Value,
}

impl RedFlag {
    pub fn new(kind: FlagKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            details: serde_json::Value::Null,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }
}
