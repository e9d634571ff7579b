//! Published scoring thresholds and red-flag limits
//!
//! These tables are configuration data: category scorers award points by
//! looking values up in them, and output parity depends on the exact
//! constants. Bands are `(cutoff, points)` pairs evaluated in order with a
//! floor when nothing matches.

/// Points for a value where *lower is better*: first band whose cutoff the
/// value does not exceed wins.
pub(crate) fn band_below(value: f64, bands: &[(f64, u32)], floor: u32) -> u32 {
    for (cutoff, points) in bands {
        if value <= *cutoff {
            return *points;
        }
    }
    floor
}

/// Points for a value where *higher is better*: first band whose cutoff the
/// value meets wins.
pub(crate) fn band_above(value: f64, bands: &[(f64, u32)], floor: u32) -> u32 {
    for (cutoff, points) in bands {
        if value >= *cutoff {
            return *points;
        }
    }
    floor
}

// ---------------------------------------------------------------------------
// Portfolio performance (weight 0.25)
// ---------------------------------------------------------------------------

/// Default rate (fraction), 40 points available
pub const DEFAULT_RATE_BANDS: &[(f64, u32)] = &[(0.01, 40), (0.03, 30), (0.05, 20)];
pub const DEFAULT_RATE_FLOOR: u32 = 10;

/// Total 30/60/90-day delinquency (fraction), 40 points available
pub const DELINQUENCY_BANDS: &[(f64, u32)] = &[(0.03, 40), (0.07, 30), (0.12, 20)];
pub const DELINQUENCY_FLOOR: u32 = 10;

/// Trend points by classification of the 3-period default-rate delta
pub const TREND_IMPROVING_POINTS: u32 = 20;
pub const TREND_STABLE_POINTS: u32 = 15;
pub const TREND_WORSENING_POINTS: u32 = 10;
pub const TREND_DETERIORATING_POINTS: u32 = 5;
/// Awarded flat when there is no usable history
pub const TREND_NO_HISTORY_POINTS: u32 = 10;

/// Delta cutoffs for trend classification (fractions; 0.005 = 0.5pp)
pub const TREND_STABLE_DELTA: f64 = 0.005;
pub const TREND_DETERIORATING_DELTA: f64 = 0.02;

// ---------------------------------------------------------------------------
// Cash flow quality (weight 0.25)
// ---------------------------------------------------------------------------

/// Weighted DSCR (decimal multiple), 50 points available
pub const DSCR_BANDS: &[(f64, u32)] = &[(1.5, 50), (1.25, 40), (1.10, 30)];
pub const DSCR_FLOOR: u32 = 15;

/// Fraction of active loans that are current, 35 points available
pub const CURRENT_FRACTION_BANDS: &[(f64, u32)] = &[(0.95, 35), (0.90, 28), (0.85, 20)];
pub const CURRENT_FRACTION_FLOOR: u32 = 10;

/// Competitive-rate band (percent form), 15 points available
pub const RATE_FULL_BAND: (f64, f64) = (8.0, 12.0);
pub const RATE_PARTIAL_BAND: (f64, f64) = (6.0, 14.0);
pub const RATE_FULL_POINTS: u32 = 15;
pub const RATE_PARTIAL_POINTS: u32 = 10;
pub const RATE_MINIMAL_POINTS: u32 = 5;

// ---------------------------------------------------------------------------
// Documentation (weight 0.20)
// ---------------------------------------------------------------------------

/// Points per completed field of the 10-field completeness check
pub const COMPLETENESS_POINTS_PER_FIELD: u32 = 4;

/// Months of performance history, 40 points available
pub const HISTORY_LENGTH_BANDS: &[(f64, u32)] = &[(24.0, 40), (12.0, 30), (6.0, 20), (1.0, 10)];
pub const HISTORY_ABSENT_POINTS: u32 = 5;

pub const SUPPORTING_DOCS_POINTS: u32 = 20;
pub const SUPPORTING_DOCS_FLOOR: u32 = 5;

// ---------------------------------------------------------------------------
// Collateral coverage (weight 0.15)
// ---------------------------------------------------------------------------

/// Weighted LTV (percent form), 50 points available
pub const LTV_BANDS: &[(f64, u32)] = &[(60.0, 50), (70.0, 40), (80.0, 30)];
pub const LTV_FLOOR: u32 = 15;

/// First-lien fraction over records carrying lien text, 30 points available
pub const FIRST_LIEN_BANDS: &[(f64, u32)] = &[(0.90, 30), (0.70, 22), (0.50, 15)];
pub const FIRST_LIEN_FLOOR: u32 = 8;
/// A tape without any lien column says nothing about seniority
pub const FIRST_LIEN_UNKNOWN_POINTS: u32 = 15;

/// Average appraisal age in months, 20 points available
pub const APPRAISAL_AGE_BANDS: &[(f64, u32)] = &[(12.0, 20), (24.0, 15), (36.0, 10)];
pub const APPRAISAL_AGE_FLOOR: u32 = 5;
pub const APPRAISAL_ABSENT_POINTS: u32 = 5;

// ---------------------------------------------------------------------------
// Diversification (weight 0.10)
// ---------------------------------------------------------------------------

/// Largest single exposure (fraction), 30 points available
pub const LARGEST_EXPOSURE_BANDS: &[(f64, u32)] = &[(0.05, 30), (0.10, 20), (0.20, 12)];
pub const LARGEST_EXPOSURE_FLOOR: u32 = 5;

/// Top-10 concentration (fraction), 30 points available
pub const TOP10_BANDS: &[(f64, u32)] = &[(0.30, 30), (0.50, 20), (0.70, 12)];
pub const TOP10_FLOOR: u32 = 5;

/// Distinct states, 20 points available
pub const STATE_COUNT_BANDS: &[(f64, u32)] = &[(10.0, 20), (5.0, 15), (3.0, 10)];
pub const STATE_COUNT_FLOOR: u32 = 5;

/// Distinct property types, 20 points available
pub const PROPERTY_TYPE_COUNT_BANDS: &[(f64, u32)] = &[(4.0, 20), (3.0, 15), (2.0, 10)];
pub const PROPERTY_TYPE_COUNT_FLOOR: u32 = 5;

// ---------------------------------------------------------------------------
// Regulatory readiness (weight 0.05)
// ---------------------------------------------------------------------------

pub const STRUCTURE_INFO_POINTS: u32 = 80;
pub const NO_STRUCTURE_INFO_POINTS: u32 = 60;

// ---------------------------------------------------------------------------
// Red-flag limits
// ---------------------------------------------------------------------------

/// Default rate above this fraction is a high-severity flag
pub const FLAG_MAX_DEFAULT_RATE: f64 = 0.10;
/// Largest single exposure above this fraction is a high-severity flag
pub const FLAG_MAX_SINGLE_EXPOSURE: f64 = 0.20;
/// Weighted LTV above this percent is a medium-severity flag
pub const FLAG_MAX_WEIGHTED_LTV: f64 = 80.0;
/// Loan-level DSCR below this multiple is a medium-severity flag
pub const FLAG_MIN_DSCR: f64 = 1.0;
/// Appraisals older than this many months are a medium-severity flag
pub const FLAG_MAX_APPRAISAL_AGE_MONTHS: i32 = 36;
