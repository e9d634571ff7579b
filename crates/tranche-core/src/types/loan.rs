//! Loan tape record types

use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment status of a loan as reported on the tape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "current")]
    Current,
    #[serde(rename = "30_day")]
    ThirtyDay,
    #[serde(rename = "60_day")]
    SixtyDay,
    #[serde(rename = "90_day")]
    NinetyDay,
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "paid_off")]
    PaidOff,
}

impl PaymentStatus {
    /// Canonical string form, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Current => "current",
            PaymentStatus::ThirtyDay => "30_day",
            PaymentStatus::SixtyDay => "60_day",
            PaymentStatus::NinetyDay => "90_day",
            PaymentStatus::Default => "default",
            PaymentStatus::PaidOff => "paid_off",
        }
    }

    /// True for any past-due bucket (30/60/90 day or default)
    pub fn is_delinquent(&self) -> bool {
        matches!(
            self,
            PaymentStatus::ThirtyDay
                | PaymentStatus::SixtyDay
                | PaymentStatus::NinetyDay
                | PaymentStatus::Default
        )
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = CoreError;

    /// Strict parse of the canonical form. Tolerant mapping of free-text
    /// tape values lives in the ingestion crate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(PaymentStatus::Current),
            "30_day" => Ok(PaymentStatus::ThirtyDay),
            "60_day" => Ok(PaymentStatus::SixtyDay),
            "90_day" => Ok(PaymentStatus::NinetyDay),
            "default" => Ok(PaymentStatus::Default),
            "paid_off" => Ok(PaymentStatus::PaidOff),
            other => Err(CoreError::UnknownPaymentStatus(other.to_string())),
        }
    }
}

/// One row of a lender's loan tape.
///
/// `loan_id` and `current_balance` are the only required fields; everything
/// else is optional and absent values are excluded from weighted
/// calculations rather than treated as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub loan_id: String,
    pub borrower_name: Option<String>,
    pub original_balance: Option<f64>,
    pub current_balance: f64,
    /// Interest rate as a percentage (8.5 means 8.5%)
    pub interest_rate: Option<f64>,
    pub origination_date: Option<NaiveDate>,
    pub maturity_date: Option<NaiveDate>,
    pub term_months: Option<u32>,
    /// Status as reported; `None` when the tape carried no status column
    pub payment_status: Option<PaymentStatus>,
    pub property_type: Option<String>,
    pub property_state: Option<String>,
    pub property_city: Option<String>,
    pub property_value: Option<f64>,
    /// Loan-to-value as a percentage (75.0 means 75%)
    pub original_ltv: Option<f64>,
    pub current_ltv: Option<f64>,
    /// Debt-service coverage ratio as a decimal multiple (1.25 means 1.25x)
    pub dscr: Option<f64>,
    /// Free-text lien position, classified heuristically downstream
    pub lien_position: Option<String>,
    pub appraisal_date: Option<NaiveDate>,
    pub loan_purpose: Option<String>,
}

impl LoanRecord {
    /// Create a record with the two required fields set
    pub fn new(loan_id: impl Into<String>, current_balance: f64) -> Self {
        Self {
            loan_id: loan_id.into(),
            borrower_name: None,
            original_balance: None,
            current_balance,
            interest_rate: None,
            origination_date: None,
            maturity_date: None,
            term_months: None,
            payment_status: None,
            property_type: None,
            property_state: None,
            property_city: None,
            property_value: None,
            original_ltv: None,
            current_ltv: None,
            dscr: None,
            lien_position: None,
            appraisal_date: None,
            loan_purpose: None,
        }
    }

    /// Effective status: a tape without a status column is treated as current
    pub fn status(&self) -> PaymentStatus {
        self.payment_status.unwrap_or(PaymentStatus::Current)
    }
}
