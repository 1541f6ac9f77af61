//! Calibration anchors for the cyclic and lunar resolvers.
//!
//! A [`CalibrationSet`] bundles every reference point one lunar year needs:
//! its new-year date, its month-length table, a day whose branch is known,
//! and a year whose stem/branch are known. Sets are plain data passed to the
//! resolvers, so a recalibration is a data change.
//!
//! [`CalibrationTable`] keys sets by lunar year. Years without an explicit
//! entry get an approximated set derived from the nearest explicit one by
//! stepping mean synodic months; see [`CalibrationTable::approximate`]. A
//! year that follows an explicit set always starts where that set ends.

use std::borrow::Cow;

use almanac_time::{CalendarDate, whole_days_between};

use crate::error::CalibrationError;
use crate::sexagenary::YearAnchor;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Mean lunations per tropical year.
pub const LUNATIONS_PER_YEAR: f64 = 12.368_266_6;

/// Lunar new year always lands in [Jan 21, Feb 20].
const NEW_YEAR_EARLIEST: (u32, u32) = (1, 21);
const NEW_YEAR_LATEST: (u32, u32) = (2, 20);

/// Month inserted after month 6 in approximated 13-month years.
const APPROX_LEAP_AFTER: u8 = 6;

/// Reference points for one lunar year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationSet {
    /// Revision label, e.g. `"lunar-2024/v1"`.
    pub version: Cow<'static, str>,
    /// Gregorian year in which this lunar year begins.
    pub lunar_year: i32,
    /// Gregorian date of month 1, day 1.
    pub new_year: CalendarDate,
    /// Day counts in month order, leap month in its slot (12 or 13 entries).
    pub month_lengths: Cow<'static, [u8]>,
    /// Number of the month that is repeated as a leap month, if any.
    pub leap_month: Option<u8>,
    /// A date whose day branch is known.
    pub day_anchor: CalendarDate,
    /// Branch index (0..12) assigned to `day_anchor` by the officer cycle.
    pub day_anchor_branch: u8,
    /// A year with known stem and branch.
    pub year_anchor: YearAnchor,
}

/// Shared day anchor: 2024-02-10 opens the Jian-Chu cycle at 建.
const DAY_ANCHOR: CalendarDate = CalendarDate::from_ymd(2024, 2, 10);
const DAY_ANCHOR_BRANCH: u8 = 3;

/// 2024 = 甲辰.
const YEAR_ANCHOR: YearAnchor = YearAnchor {
    year: 2024,
    stem: 0,
    branch: 4,
};

/// Explicit sets shipped with the engine.
pub static BUILTIN_SETS: [CalibrationSet; 4] = [
    CalibrationSet {
        version: Cow::Borrowed("lunar-2023/v1"),
        lunar_year: 2023,
        new_year: CalendarDate::from_ymd(2023, 1, 22),
        // 闰二月
        month_lengths: Cow::Borrowed(&[29, 30, 29, 29, 30, 30, 29, 30, 30, 29, 30, 29, 30]),
        leap_month: Some(2),
        day_anchor: DAY_ANCHOR,
        day_anchor_branch: DAY_ANCHOR_BRANCH,
        year_anchor: YEAR_ANCHOR,
    },
    CalibrationSet {
        version: Cow::Borrowed("lunar-2024/v1"),
        lunar_year: 2024,
        new_year: CalendarDate::from_ymd(2024, 2, 10),
        month_lengths: Cow::Borrowed(&[29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29]),
        leap_month: None,
        day_anchor: DAY_ANCHOR,
        day_anchor_branch: DAY_ANCHOR_BRANCH,
        year_anchor: YEAR_ANCHOR,
    },
    CalibrationSet {
        version: Cow::Borrowed("lunar-2025/v1"),
        lunar_year: 2025,
        new_year: CalendarDate::from_ymd(2025, 1, 29),
        // 闰六月
        month_lengths: Cow::Borrowed(&[30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29]),
        leap_month: Some(6),
        day_anchor: DAY_ANCHOR,
        day_anchor_branch: DAY_ANCHOR_BRANCH,
        year_anchor: YEAR_ANCHOR,
    },
    CalibrationSet {
        version: Cow::Borrowed("lunar-2026/v1"),
        lunar_year: 2026,
        new_year: CalendarDate::from_ymd(2026, 2, 17),
        month_lengths: Cow::Borrowed(&[30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 29]),
        leap_month: None,
        day_anchor: DAY_ANCHOR,
        day_anchor_branch: DAY_ANCHOR_BRANCH,
        year_anchor: YEAR_ANCHOR,
    },
];

impl CalibrationSet {
    /// Number of days in the lunar year this set describes.
    pub fn year_length(&self) -> i64 {
        self.month_lengths.iter().map(|&l| l as i64).sum()
    }

    /// Gregorian date of the following lunar new year, per this table.
    pub fn next_new_year(&self) -> CalendarDate {
        self.new_year.add_days(self.year_length())
    }

    /// Whether `date` lies inside the lunar year this set describes.
    pub fn covers(&self, date: CalendarDate) -> bool {
        date >= self.new_year && date < self.next_new_year()
    }

    /// Month number and leap flag of the `slot`-th table entry (0-based).
    ///
    /// Slots past the table wrap around the twelve month numbers.
    pub fn month_at(&self, slot: usize) -> (u8, bool) {
        match self.leap_month {
            Some(leap) if slot == leap as usize => (leap, true),
            Some(leap) if slot > leap as usize && slot < self.month_lengths.len() => {
                (slot as u8, false)
            }
            _ if slot < self.month_lengths.len() => (slot as u8 + 1, false),
            _ => {
                let past = slot - self.month_lengths.len();
                ((past % 12) as u8 + 1, false)
            }
        }
    }

    /// Check the set's internal consistency.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        let lunar_year = self.lunar_year;
        let expected = match self.leap_month {
            None => 12,
            Some(m) if (1..=12).contains(&m) => 13,
            Some(month) => return Err(CalibrationError::LeapMonth { lunar_year, month }),
        };
        if self.month_lengths.len() != expected {
            return Err(CalibrationError::MonthCount {
                lunar_year,
                expected,
                found: self.month_lengths.len(),
            });
        }
        if let Some((index, &length)) = self
            .month_lengths
            .iter()
            .enumerate()
            .find(|&(_, l)| !(29..=30).contains(l))
        {
            return Err(CalibrationError::MonthLength {
                lunar_year,
                index,
                length,
            });
        }
        if !in_new_year_window(self.new_year, lunar_year) {
            return Err(CalibrationError::NewYearOutsideYear { lunar_year });
        }
        let following = lunar_year.saturating_add(1);
        if !in_new_year_window(self.next_new_year(), following) {
            return Err(CalibrationError::NewYearOutsideYear {
                lunar_year: following,
            });
        }
        if self.day_anchor_branch >= 12 {
            return Err(CalibrationError::Anchor("day branch must be below 12"));
        }
        let YearAnchor { stem, branch, .. } = self.year_anchor;
        if stem >= 10 || branch >= 12 {
            return Err(CalibrationError::Anchor("year stem/branch out of range"));
        }
        if stem % 2 != branch % 2 {
            return Err(CalibrationError::Anchor("year stem and branch differ in parity"));
        }
        Ok(())
    }
}

/// Lunar-year → calibration lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationTable {
    sets: Vec<CalibrationSet>,
}

impl CalibrationTable {
    /// Table holding the built-in sets.
    pub fn builtin() -> Self {
        Self {
            sets: BUILTIN_SETS.to_vec(),
        }
    }

    /// Build a table from arbitrary sets, validating each and every seam.
    pub fn with_sets(sets: Vec<CalibrationSet>) -> Result<Self, CalibrationError> {
        if sets.is_empty() {
            return Err(CalibrationError::EmptyTable);
        }
        let mut table = Self {
            sets: Vec::with_capacity(sets.len()),
        };
        for set in sets {
            table.insert(set)?;
        }
        Ok(table)
    }

    /// Add or replace the set for its lunar year.
    ///
    /// A set adjacent to an existing one must agree on the shared new-year
    /// date; on error the table is left unchanged.
    pub fn insert(&mut self, set: CalibrationSet) -> Result<(), CalibrationError> {
        set.validate()?;
        if let Some(prev) = self.explicit(set.lunar_year.saturating_sub(1)) {
            check_seam(prev, &set)?;
        }
        if let Some(next) = self.explicit(set.lunar_year.saturating_add(1)) {
            check_seam(&set, next)?;
        }
        match self
            .sets
            .binary_search_by_key(&set.lunar_year, |s| s.lunar_year)
        {
            Ok(i) => self.sets[i] = set,
            Err(i) => self.sets.insert(i, set),
        }
        Ok(())
    }

    /// Explicit sets in lunar-year order.
    pub fn sets(&self) -> &[CalibrationSet] {
        &self.sets
    }

    /// The explicit set for `lunar_year`, if present.
    pub fn explicit(&self, lunar_year: i32) -> Option<&CalibrationSet> {
        self.sets
            .binary_search_by_key(&lunar_year, |s| s.lunar_year)
            .ok()
            .map(|i| &self.sets[i])
    }

    /// Set for `lunar_year`: borrowed when explicit, owned when approximated.
    pub fn get(&self, lunar_year: i32) -> Cow<'_, CalibrationSet> {
        match self.explicit(lunar_year) {
            Some(set) => Cow::Borrowed(set),
            None => Cow::Owned(self.approximate(lunar_year)),
        }
    }

    /// Lunar new-year date of `lunar_year`.
    ///
    /// Explicit when a set exists, the end of the previous year's explicit
    /// set when that exists, estimated otherwise.
    pub fn new_year(&self, lunar_year: i32) -> CalendarDate {
        if let Some(set) = self.explicit(lunar_year) {
            return set.new_year;
        }
        match lunar_year.checked_sub(1).and_then(|y| self.explicit(y)) {
            Some(prev) => prev.next_new_year(),
            None => self.estimate_new_year(lunar_year),
        }
    }

    /// Lunar year containing `date`.
    pub fn lunar_year_for(&self, date: CalendarDate) -> i32 {
        let y = date.year();
        if date < self.new_year(y) { y.saturating_sub(1) } else { y }
    }

    /// Set for the lunar year containing `date`.
    pub fn for_date(&self, date: CalendarDate) -> Cow<'_, CalibrationSet> {
        self.get(self.lunar_year_for(date))
    }

    /// Derive a set for a year without an explicit entry.
    ///
    /// New-year dates are estimated from the nearest explicit set by whole
    /// mean lunations, kept inside the Jan 21 – Feb 20 window. Month lengths
    /// alternate 30/29 to fill the gap to the next estimated new year; a
    /// 13-month year gets its leap slot after month 6. Day and year anchors
    /// are copied unchanged, since both cycles are exact at any distance.
    pub fn approximate(&self, lunar_year: i32) -> CalibrationSet {
        let base = self.nearest(lunar_year);
        let new_year = self.new_year(lunar_year);
        let next = self.new_year(lunar_year.saturating_add(1));
        let days = whole_days_between(new_year, next);
        let months: usize = if days > 370 { 13 } else { 12 };
        CalibrationSet {
            version: Cow::Owned(format!("approx-{lunar_year}/from-{}", base.version)),
            lunar_year,
            new_year,
            month_lengths: Cow::Owned(spread_month_lengths(days, months)),
            leap_month: (months == 13).then_some(APPROX_LEAP_AFTER),
            day_anchor: base.day_anchor,
            day_anchor_branch: base.day_anchor_branch,
            year_anchor: base.year_anchor,
        }
    }

    fn nearest(&self, lunar_year: i32) -> &CalibrationSet {
        // `with_sets` refuses empty tables and `builtin` is never empty.
        let idx = match self
            .sets
            .binary_search_by_key(&lunar_year, |s| s.lunar_year)
        {
            Ok(i) => i,
            Err(0) => 0,
            Err(i) if i >= self.sets.len() => self.sets.len() - 1,
            Err(i) => {
                let below = lunar_year - self.sets[i - 1].lunar_year;
                let above = self.sets[i].lunar_year - lunar_year;
                if below <= above { i - 1 } else { i }
            }
        };
        &self.sets[idx]
    }

    fn estimate_new_year(&self, lunar_year: i32) -> CalendarDate {
        let base = self.nearest(lunar_year);
        // Later years step from where the base set ends.
        let (origin_year, origin) = if lunar_year > base.lunar_year {
            (base.lunar_year as i64 + 1, base.next_new_year())
        } else {
            (base.lunar_year as i64, base.new_year)
        };
        let years = (lunar_year as i64 - origin_year) as f64;
        let mut k = (years * LUNATIONS_PER_YEAR).round() as i64;
        let at = |k: i64| origin.add_days((k as f64 * SYNODIC_MONTH_DAYS).round() as i64);

        let earliest = CalendarDate::from_ymd(lunar_year, NEW_YEAR_EARLIEST.0, NEW_YEAR_EARLIEST.1);
        let latest = CalendarDate::from_ymd(lunar_year, NEW_YEAR_LATEST.0, NEW_YEAR_LATEST.1);
        while at(k) < earliest {
            k += 1;
        }
        while at(k) > latest {
            k -= 1;
        }
        at(k)
    }
}

impl Default for CalibrationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn in_new_year_window(date: CalendarDate, lunar_year: i32) -> bool {
    date.year() == lunar_year
        && !date.is_before_month_day(NEW_YEAR_EARLIEST.0, NEW_YEAR_EARLIEST.1)
        && date.is_before_month_day(NEW_YEAR_LATEST.0, NEW_YEAR_LATEST.1 + 1)
}

fn check_seam(prev: &CalibrationSet, next: &CalibrationSet) -> Result<(), CalibrationError> {
    let expected = prev.next_new_year();
    if expected != next.new_year {
        return Err(CalibrationError::Discontinuous {
            lunar_year: prev.lunar_year,
            expected_next: expected.to_string(),
            found_next: next.new_year.to_string(),
        });
    }
    Ok(())
}

/// Split `days` into `months` lengths of 29 or 30, long months first on
/// even slots.
fn spread_month_lengths(days: i64, months: usize) -> Vec<u8> {
    let mut lengths = vec![29u8; months];
    let extra = (days - 29 * months as i64).clamp(0, months as i64) as usize;
    let order = (0..months).step_by(2).chain((1..months).step_by(2));
    for slot in order.take(extra) {
        lengths[slot] = 30;
    }
    lengths
}
