//! Portfolio metrics calculation

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use tranche_core::{LoanRecord, PaymentStatus, PortfolioMetrics};

/// Reduce normalized loan records to a [`PortfolioMetrics`] snapshot.
///
/// Pure and deterministic: "now" is the explicit `as_of` date. Records
/// missing an input to a given metric are excluded from that metric rather
/// than treated as zero, and every zero-denominator case resolves to 0.
pub fn calculate_portfolio_metrics(records: &[LoanRecord], as_of: NaiveDate) -> PortfolioMetrics {
    if records.is_empty() {
        return PortfolioMetrics::empty();
    }

    let portfolio_size: f64 = records.iter().map(|r| r.current_balance).sum();
    let loan_count = records.len();
    let avg_loan_size = if loan_count > 0 {
        portfolio_size / loan_count as f64
    } else {
        0.0
    };

    // Status distribution over non-paid-off loans
    let paid_off = records
        .iter()
        .filter(|r| r.status() == PaymentStatus::PaidOff)
        .count();
    let active = loan_count - paid_off;
    let status_rate = |status: PaymentStatus| -> f64 {
        if active == 0 {
            return 0.0;
        }
        let n = records.iter().filter(|r| r.status() == status).count();
        n as f64 / active as f64
    };

    // Concentration: sort balances descending
    let mut balances: Vec<f64> = records.iter().map(|r| r.current_balance).collect();
    balances.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    let (largest_exposure, top10_concentration) = if portfolio_size > 0.0 {
        let top10: f64 = balances.iter().take(10).sum();
        (balances[0] / portfolio_size, top10 / portfolio_size)
    } else {
        (0.0, 0.0)
    };

    PortfolioMetrics {
        portfolio_size,
        loan_count,
        avg_loan_size,
        weighted_avg_rate: weighted_average(records, |r| r.interest_rate),
        weighted_avg_ltv: weighted_average(records, |r| r.current_ltv),
        weighted_avg_dscr: weighted_average(records, |r| r.dscr),
        current_rate: status_rate(PaymentStatus::Current),
        delinquency_rate_30: status_rate(PaymentStatus::ThirtyDay),
        delinquency_rate_60: status_rate(PaymentStatus::SixtyDay),
        delinquency_rate_90: status_rate(PaymentStatus::NinetyDay),
        default_rate: status_rate(PaymentStatus::Default),
        avg_loan_age_months: average_months(records, |r| {
            r.origination_date.map(|d| months_between(d, as_of).max(0))
        }),
        avg_remaining_term_months: average_months(records, |r| {
            r.maturity_date.map(|d| months_between(as_of, d).max(0))
        }),
        largest_exposure,
        top10_concentration,
        state_concentration: concentration_map(records, portfolio_size, |r| {
            r.property_state.as_deref()
        }),
        property_type_concentration: concentration_map(records, portfolio_size, |r| {
            r.property_type.as_deref()
        }),
    }
}

/// Balance-weighted average over records where both the metric and the
/// weight are present. A zero weight-sum yields 0, never a division error.
fn weighted_average(records: &[LoanRecord], value: impl Fn(&LoanRecord) -> Option<f64>) -> f64 {
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for record in records {
        if let Some(v) = value(record) {
            weighted_sum += v * record.current_balance;
            weight_sum += record.current_balance;
        }
    }
    if weight_sum > 0.0 {
        weighted_sum / weight_sum
    } else {
        0.0
    }
}

fn average_months(records: &[LoanRecord], months: impl Fn(&LoanRecord) -> Option<i32>) -> f64 {
    let values: Vec<i32> = records.iter().filter_map(&months).collect();
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i32>() as f64 / values.len() as f64
}

/// Whole months from `from` to `to`; negative when `to` precedes `from`
pub(crate) fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months =
        (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    if to.day() < from.day() {
        months -= 1;
    }
    months
}

/// Balance share per grouping key; only records with both a key and a
/// balance contribute. Fractions are rounded to 3 decimals for stable
/// comparison.
fn concentration_map<'a>(
    records: &'a [LoanRecord],
    portfolio_size: f64,
    key: impl Fn(&'a LoanRecord) -> Option<&'a str>,
) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    if portfolio_size <= 0.0 {
        return totals;
    }
    for record in records {
        if let Some(k) = key(record) {
            *totals.entry(k.trim().to_string()).or_insert(0.0) += record.current_balance;
        }
    }
    totals
        .into_iter()
        .map(|(k, total)| (k, round3(total / portfolio_size)))
        .collect()
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
