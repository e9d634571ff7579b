//! Monthly performance history records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A history shorter than this many monthly snapshots is treated as
/// "limited history" for scoring and red-flag purposes.
pub const FULL_HISTORY_MONTHS: usize = 6;

/// One monthly portfolio snapshot from a performance history workbook.
///
/// All percentage buckets are fractions in [0, 1]. Collections are sorted
/// ascending by `period` before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceHistoryRecord {
    /// The snapshot month
    pub period: NaiveDate,
    pub portfolio_balance: Option<f64>,
    pub loan_count: Option<u32>,
    pub pct_current: Option<f64>,
    pub pct_30_day: Option<f64>,
    pub pct_60_day: Option<f64>,
    pub pct_90_day: Option<f64>,
    pub pct_default: Option<f64>,
    pub prepayments: Option<f64>,
    pub new_originations: Option<f64>,
}

impl PerformanceHistoryRecord {
    pub fn new(period: NaiveDate) -> Self {
        Self {
            period,
            portfolio_balance: None,
            loan_count: None,
            pct_current: None,
            pct_30_day: None,
            pct_60_day: None,
            pct_90_day: None,
            pct_default: None,
            prepayments: None,
            new_originations: None,
        }
    }
}
