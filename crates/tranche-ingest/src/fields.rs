//! Tolerant per-field parsers
//!
//! Every parser here follows the same contract: malformed input yields
//! `None` (the value becomes absent), never an error. Scale heuristics for
//! rates and LTVs are explicit documented thresholds; see the unit tests
//! pinning their edge behavior.

use crate::cell::Cell;
use chrono::{Duration, NaiveDate};
use tranche_core::PaymentStatus;

/// Excel serial dates count days from this epoch
const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Interest rates at or below this magnitude are assumed to be decimal
/// fractions (0.085 -> 8.5%); above it, already-percent (8.5 -> 8.5%).
/// A value of exactly 0.3 therefore reads as 30% - an inherent ambiguity
/// of the heuristic, pinned by test rather than "fixed".
pub const RATE_DECIMAL_CUTOFF: f64 = 0.3;

/// LTVs at or below 1 are decimal fractions (0.75 -> 75%); above, percent.
pub const LTV_DECIMAL_CUTOFF: f64 = 1.0;

/// Parse a numeric cell, tolerating currency/percent text forms.
///
/// Text values are stripped of `$`, commas, and whitespace. A trailing `%`
/// divides by 100 only when the parsed magnitude exceeds 1, which reads
/// both "8%" and "0.08%" as 0.08.
pub fn parse_number(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(n) if n.is_finite() => Some(*n),
        Cell::Text(s) => parse_number_text(s),
        _ => None,
    }
}

fn parse_number_text(raw: &str) -> Option<f64> {
    let mut s = raw.trim().to_string();
    if s.is_empty() || s == "-" || s.eq_ignore_ascii_case("n/a") || s.eq_ignore_ascii_case("na") {
        return None;
    }

    let percent = s.ends_with('%');
    if percent {
        s.truncate(s.len() - 1);
    }
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();

    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    if percent && value.abs() > 1.0 {
        Some(value / 100.0)
    } else {
        Some(value)
    }
}

/// Scale a parsed rate to percent form
pub fn normalize_rate(value: f64) -> f64 {
    if value <= RATE_DECIMAL_CUTOFF {
        value * 100.0
    } else {
        value
    }
}

/// Scale a parsed LTV to percent form
pub fn normalize_ltv(value: f64) -> f64 {
    if value <= LTV_DECIMAL_CUTOFF {
        value * 100.0
    } else {
        value
    }
}

/// Scale a history percentage bucket to a fraction in [0, 1]
pub fn normalize_fraction(value: f64) -> f64 {
    if value > 1.0 {
        value / 100.0
    } else {
        value
    }
}

/// Parse a date cell: native dates, Excel serials, ISO and US strings, and
/// short "Mon-YY" tokens. Unparsable values become absent.
pub fn parse_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Date(d) => Some(*d),
        Cell::Number(n) => parse_serial_date(*n),
        Cell::Text(s) => parse_date_text(s),
        _ => None,
    }
}

fn parse_serial_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 || serial > 200_000.0 {
        return None;
    }
    let (y, m, d) = EXCEL_EPOCH;
    NaiveDate::from_ymd_opt(y, m, d)
        .map(|epoch| epoch + Duration::days(serial.trunc() as i64))
}

fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for format in ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    parse_month_token(s)
}

/// "Jan-24", "Jan 2024" style month tokens resolve to the first of the month
fn parse_month_token(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split(['-', ' ', '/']).filter(|p| !p.is_empty());
    let month_part = parts.next()?;
    let year_part = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let month = month_from_abbreviation(month_part)?;
    let year: i32 = year_part.parse().ok()?;
    let year = if (0..100).contains(&year) { 2000 + year } else { year };
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn month_from_abbreviation(s: &str) -> Option<u32> {
    let lower = s.to_lowercase();
    let prefix = lower.get(0..3)?;
    let month = match prefix {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Map free-text or numeric status codes onto the closed status enum.
/// Returns `None` only for unrecognized values; the caller decides the
/// fallback (the tape normalizer defaults to `current`).
pub fn parse_status(cell: &Cell) -> Option<PaymentStatus> {
    match cell {
        Cell::Number(n) => match n.round() as i64 {
            0 => Some(PaymentStatus::Current),
            1 => Some(PaymentStatus::ThirtyDay),
            2 => Some(PaymentStatus::SixtyDay),
            3 => Some(PaymentStatus::NinetyDay),
            4 => Some(PaymentStatus::Default),
            5 => Some(PaymentStatus::PaidOff),
            _ => None,
        },
        Cell::Text(s) => parse_status_text(s),
        _ => None,
    }
}

fn parse_status_text(raw: &str) -> Option<PaymentStatus> {
    let s = raw.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }
    // Canonical form first
    if let Ok(status) = s.parse::<PaymentStatus>() {
        return Some(status);
    }
    if s.contains("paid") || s.contains("payoff") || s.contains("pif") || s.contains("prepaid") {
        return Some(PaymentStatus::PaidOff);
    }
    if s.contains("default") || s.contains("foreclos") || s.contains("reo") || s.contains("npl") {
        return Some(PaymentStatus::Default);
    }
    if s.contains("90") {
        return Some(PaymentStatus::NinetyDay);
    }
    if s.contains("60") {
        return Some(PaymentStatus::SixtyDay);
    }
    if s.contains("30") {
        return Some(PaymentStatus::ThirtyDay);
    }
    if s.contains("current") || s.contains("perform") || s == "c" || s == "ok" || s == "active" {
        return Some(PaymentStatus::Current);
    }
    None
}

/// Text extraction; numeric cells become their display form ("101", "8.5")
pub fn parse_text(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Text(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Cell::Number(n) if n.is_finite() => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                Some(format!("{}", *n as i64))
            } else {
                Some(n.to_string())
            }
        }
        _ => None,
    }
}

/// Non-negative integer counts (term months, loan counts)
pub fn parse_count(cell: &Cell) -> Option<u32> {
    let value = parse_number(cell)?;
    if value < 0.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value.round() as u32)
}
