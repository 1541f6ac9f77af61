//! Error types for calendar-date construction and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date validation, parsing, or zone construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// The (year, month, day) triple is not a real Gregorian date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Text could not be parsed as `YYYY-MM-DD` (or `MM-DD`).
    Parse(String),
    /// Year outside the range `CalendarDate` supports.
    OutOfRange(i32),
    /// UTC offset outside ±14:00.
    InvalidOffset(i32),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::OutOfRange(year) => write!(f, "year {year} outside -9999..=9999"),
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
            Self::InvalidOffset(min) => write!(f, "UTC offset {min} min outside ±14:00"),
        }
    }
}

impl Error for TimeError {}

impl From<std::num::ParseIntError> for TimeError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::Parse(e.to_string())
    }
}
