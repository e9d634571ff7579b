//! Shared helpers for SDK integration tests

use chrono::NaiveDate;
use tranche_sdk::{LoanRecord, PerformanceHistoryRecord};

/// A clean, diversified 20-loan pool that should assess as ready
pub fn clean_records() -> Vec<LoanRecord> {
    let states = ["TX", "CA", "NY", "FL", "WA", "GA", "OH", "IL", "NC", "AZ"];
    let types = ["Multifamily", "Retail", "Office", "Industrial"];
    (0..20)
        .map(|i| {
            let mut record = LoanRecord::new(format!("L{}", i + 1), 100_000.0);
            record.interest_rate = Some(9.0);
            record.payment_status = Some(tranche_sdk::PaymentStatus::Current);
            record.origination_date = NaiveDate::from_ymd_opt(2023, 1, 1);
            record.maturity_date = NaiveDate::from_ymd_opt(2030, 1, 1);
            record.property_state = Some(states[i % states.len()].to_string());
            record.property_type = Some(types[i % types.len()].to_string());
            record.current_ltv = Some(58.0);
            record.dscr = Some(1.6);
            record.lien_position = Some("1st".to_string());
            record.appraisal_date = NaiveDate::from_ymd_opt(2024, 1, 1);
            record
        })
        .collect()
}

/// Monthly history with a flat 1% default rate
pub fn history(months: usize) -> Vec<PerformanceHistoryRecord> {
    (0..months)
        .map(|i| {
            let year = 2023 + (i / 12) as i32;
            let month = (i % 12) as u32 + 1;
            let mut record =
                PerformanceHistoryRecord::new(NaiveDate::from_ymd_opt(year, month, 1).unwrap());
            record.pct_default = Some(0.01);
            record.pct_current = Some(0.97);
            record
        })
        .collect()
}
