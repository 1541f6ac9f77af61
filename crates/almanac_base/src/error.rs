//! Error types for calibration data.
//!
//! The resolvers themselves are total; only user-supplied calibration sets
//! can be rejected.

use std::error::Error;
use std::fmt::{Display, Formatter};

use almanac_time::TimeError;

/// Reasons a calibration set or table is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalibrationError {
    /// A table must hold at least one explicit set.
    EmptyTable,
    /// Month count does not match the leap-month declaration.
    MonthCount { lunar_year: i32, expected: usize, found: usize },
    /// A month length other than 29 or 30.
    MonthLength { lunar_year: i32, index: usize, length: u8 },
    /// Leap month number outside 1..=12.
    LeapMonth { lunar_year: i32, month: u8 },
    /// Stem/branch index out of range or of mismatched parity.
    Anchor(&'static str),
    /// New-year date (or the one a set implies for the following year) falls
    /// outside Jan 21 - Feb 20 of the Gregorian year it names.
    NewYearOutsideYear { lunar_year: i32 },
    /// Adjacent sets disagree on where one lunar year ends and the next begins.
    Discontinuous { lunar_year: i32, expected_next: String, found_next: String },
    /// Bad date inside a calibration record.
    Time(TimeError),
}

impl Display for CalibrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTable => write!(f, "calibration table has no sets"),
            Self::MonthCount {
                lunar_year,
                expected,
                found,
            } => write!(
                f,
                "lunar year {lunar_year}: expected {expected} month lengths, found {found}"
            ),
            Self::MonthLength {
                lunar_year,
                index,
                length,
            } => write!(
                f,
                "lunar year {lunar_year}: month #{index} has {length} days (29 or 30 allowed)"
            ),
            Self::LeapMonth { lunar_year, month } => {
                write!(f, "lunar year {lunar_year}: leap month {month} not in 1..=12")
            }
            Self::Anchor(msg) => write!(f, "invalid anchor: {msg}"),
            Self::NewYearOutsideYear { lunar_year } => {
                write!(f, "lunar year {lunar_year}: new-year date outside Jan 21 - Feb 20")
            }
            Self::Discontinuous {
                lunar_year,
                expected_next,
                found_next,
            } => write!(
                f,
                "lunar year {lunar_year} ends before {expected_next}, next set starts {found_next}"
            ),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for CalibrationError {}

impl From<TimeError> for CalibrationError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
