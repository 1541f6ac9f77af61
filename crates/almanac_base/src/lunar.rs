//! Approximate lunar month/day from a calibrated new-year anchor.
//!
//! The date is measured in whole days from month 1 day 1 of the set's lunar
//! year, then walked through the month-length table. Results are exact only
//! inside the lunar year the set describes:
//!
//! - past the end of the table, months continue with an alternating 30/29
//!   pattern and month numbers wrap after 12;
//! - before the anchor, the date is placed in month 12 of the previous
//!   lunar year using this set's final month length.
//!
//! Neither case fails. Callers wanting exact results pick the set via
//! [`CalibrationTable::for_date`].

use std::fmt::{Display, Formatter};

use almanac_time::{CalendarDate, whole_days_between};

use crate::calibration::{CalibrationSet, CalibrationTable};
use crate::fmt::{day_name, month_name};

/// Position inside a lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    /// Month number, 1..=12.
    pub month: u8,
    /// Whether this is the repeated (闰) instance of `month`.
    pub leap: bool,
    /// Day of month, 1..=30.
    pub day: u8,
}

impl LunarDate {
    pub const NEW_YEAR: Self = Self {
        month: 1,
        leap: false,
        day: 1,
    };
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", month_name(self.month, self.leap), day_name(self.day))
    }
}

/// Resolve the lunar month/day of `date` against one calibration set.
pub fn resolve_lunar(date: CalendarDate, calibration: &CalibrationSet) -> LunarDate {
    let days = whole_days_between(calibration.new_year, date);
    let lengths = &calibration.month_lengths;

    if days < 0 {
        let last = lengths.len().saturating_sub(1);
        let len = lengths.get(last).copied().unwrap_or(30) as i64;
        let (_, leap) = calibration.month_at(last);
        return LunarDate {
            month: 12,
            leap,
            day: (len + days + 1).clamp(1, len.min(30)) as u8,
        };
    }

    let mut remaining = days;
    let mut slot = 0usize;
    loop {
        let len = match lengths.get(slot) {
            Some(&l) => l as i64,
            // Degraded continuation past the calibrated year.
            None if (slot - lengths.len()) % 2 == 0 => 30,
            None => 29,
        };
        if remaining < len {
            let (month, leap) = calibration.month_at(slot);
            return LunarDate {
                month,
                leap,
                day: (remaining + 1).clamp(1, 30) as u8,
            };
        }
        remaining -= len;
        slot += 1;
    }
}

/// Lunar new-year date of `lunar_year`, explicit or approximated.
pub fn lunar_new_year(lunar_year: i32, table: &CalibrationTable) -> CalendarDate {
    table.new_year(lunar_year)
}

/// Lunar year containing `date`.
pub fn lunar_year_for(date: CalendarDate, table: &CalibrationTable) -> i32 {
    table.lunar_year_for(date)
}
