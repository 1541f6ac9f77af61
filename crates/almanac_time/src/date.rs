//! Validated Gregorian calendar date.
//!
//! `CalendarDate` is the value every resolver consumes. It carries its own
//! Julian Day Number so day-offset arithmetic is a subtraction.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{days_in_month, gregorian_to_jdn, jdn_to_gregorian};

/// A civil date in the reference zone.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Earliest year a date may be built for.
    pub const MIN_YEAR: i32 = -9999;
    /// Latest year a date may be built for.
    pub const MAX_YEAR: i32 = 9999;

    /// Build a date, rejecting years outside [`Self::MIN_YEAR`]..=[`Self::MAX_YEAR`],
    /// months outside 1..=12 and days past month end.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(TimeError::OutOfRange(year));
        }
        let dim = days_in_month(year, month);
        if dim == 0 || day == 0 || day > dim {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Const constructor for static tables.
    ///
    /// # Panics
    ///
    /// Panics (at compile time in a `const`/`static` initializer) if the
    /// date does not exist.
    pub const fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        let dim = days_in_month(year, month);
        assert!(dim != 0 && day != 0 && day <= dim, "invalid calendar date");
        Self { year, month, day }
    }

    /// Build a date from a Julian Day Number.
    ///
    /// Exact for any JDN; the year is not range-checked, so offsets from a
    /// valid date may step past [`Self::MAX_YEAR`].
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_gregorian(jdn);
        Self { year, month, day }
    }

    /// [`Self::from_jdn`], refusing years outside the supported range.
    pub fn try_from_jdn(jdn: i64) -> Result<Self, TimeError> {
        let date = Self::from_jdn(jdn);
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&date.year) {
            return Err(TimeError::OutOfRange(date.year));
        }
        Ok(date)
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    /// Julian Day Number of this date.
    pub fn jdn(self) -> i64 {
        gregorian_to_jdn(self.year, self.month, self.day)
    }

    /// The date `days` later (earlier when negative).
    pub fn add_days(self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }

    /// The following day.
    pub fn succ(self) -> Self {
        self.add_days(1)
    }

    /// The preceding day.
    pub fn pred(self) -> Self {
        self.add_days(-1)
    }

    /// ISO-8601 weekday, 1 = Monday .. 7 = Sunday.
    pub fn day_of_week(self) -> u32 {
        (self.jdn().rem_euclid(7) + 1) as u32
    }

    /// 1-based day of the Gregorian year.
    pub fn ordinal(self) -> u32 {
        (self.jdn() - gregorian_to_jdn(self.year, 1, 1) + 1) as u32
    }

    /// Whether this date falls before `month`/`day` of its own year.
    pub fn is_before_month_day(self, month: u32, day: u32) -> bool {
        (self.month, self.day) < (month, day)
    }
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A leading minus sign marks an astronomical (non-positive) year.
        let (sign, body) = match s.trim().strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s.trim()),
        };
        let parts: Vec<&str> = body.split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parts[0].parse()?;
        let month: u32 = parts[1].parse()?;
        let day: u32 = parts[2].parse()?;
        Self::new(sign * year, month, day)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parse a birthday written as `MM-DD`.
///
/// Only the shape and month range are checked; the day is clamped into the
/// month (February allows 29).
pub fn parse_month_day(s: &str) -> Result<(u32, u32), TimeError> {
    let (m, d) = s
        .trim()
        .split_once('-')
        .ok_or_else(|| TimeError::Parse(format!("expected MM-DD, got {s}")))?;
    let month: u32 = m.parse()?;
    let day: u32 = d.parse()?;
    if !(1..=12).contains(&month) {
        return Err(TimeError::Parse(format!("month {month} not in 1..=12")));
    }
    // 2000 is a leap year, so Feb 29 birthdays survive.
    let max = days_in_month(2000, month);
    Ok((month, day.clamp(1, max)))
}
