//! Jian-Chu (建除) day officers.
//!
//! Twelve officers rotate one per day. A day's officer is the distance
//! between the day branch and the month branch:
//!
//! ```text
//! day_branch   = (anchor_branch + days_since_anchor) mod 12
//! month_branch = (month + 2) mod 12
//! officer      = (day_branch - month_branch) mod 12
//! ```
//!
//! The month that governs the cycle is the solar month opened by each 节
//! (jie) term, see [`solar_month`]. Since the month branch only changes on a
//! 节 day, the officer sequence never breaks at the lunar new year.

use almanac_time::{CalendarDate, whole_days_between};

use crate::calibration::CalibrationSet;
use crate::util::{cyclic_index, normalize_mod};

/// The twelve day officers in cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfficer {
    /// 建 Establish
    Jian,
    /// 除 Remove
    Chu,
    /// 满 Full
    Man,
    /// 平 Balance
    Ping,
    /// 定 Settle
    Ding,
    /// 执 Hold
    Zhi,
    /// 破 Break
    Po,
    /// 危 Danger
    Wei,
    /// 成 Success
    Cheng,
    /// 收 Receive
    Shou,
    /// 开 Open
    Kai,
    /// 闭 Close
    Bi,
}

/// All 12 officers in order (0 = 建, 11 = 闭).
pub const ALL_OFFICERS: [DayOfficer; 12] = [
    DayOfficer::Jian,
    DayOfficer::Chu,
    DayOfficer::Man,
    DayOfficer::Ping,
    DayOfficer::Ding,
    DayOfficer::Zhi,
    DayOfficer::Po,
    DayOfficer::Wei,
    DayOfficer::Cheng,
    DayOfficer::Shou,
    DayOfficer::Kai,
    DayOfficer::Bi,
];

impl DayOfficer {
    /// Single-character Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jian => "建",
            Self::Chu => "除",
            Self::Man => "满",
            Self::Ping => "平",
            Self::Ding => "定",
            Self::Zhi => "执",
            Self::Po => "破",
            Self::Wei => "危",
            Self::Cheng => "成",
            Self::Shou => "收",
            Self::Kai => "开",
            Self::Bi => "闭",
        }
    }

    /// Pinyin name.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jian => "Jian",
            Self::Chu => "Chu",
            Self::Man => "Man",
            Self::Ping => "Ping",
            Self::Ding => "Ding",
            Self::Zhi => "Zhi",
            Self::Po => "Po",
            Self::Wei => "Wei",
            Self::Cheng => "Cheng",
            Self::Shou => "Shou",
            Self::Kai => "Kai",
            Self::Bi => "Bi",
        }
    }

    /// 0-based index (建=0 .. 闭=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Officer at any signed position, wrapped into the cycle.
    pub const fn from_index(i: i64) -> Self {
        ALL_OFFICERS[cyclic_index(i, 12)]
    }

    /// The officer of the following day, within one solar month.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() as i64 + 1)
    }
}

/// First day of each Gregorian month on which a 节 term opens a solar month.
///
/// Index 0 is January. Fixed approximations; the true term can fall a day
/// either side.
pub const JIE_START_DAYS: [u32; 12] = [6, 4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7];

/// Solar month number (1 = 寅 month, opening about February 4).
///
/// January before the 小寒 term belongs to month 11, after it to month 12.
pub fn solar_month(date: CalendarDate) -> u8 {
    let m = date.month() as i64;
    let jie = JIE_START_DAYS[cyclic_index(m - 1, 12)];
    let shift = if date.day() >= jie { 2 } else { 3 };
    (normalize_mod(m - shift, 12) + 1) as u8
}

/// Branch index (0..12) of `date` counted from the calibration day anchor.
pub fn day_branch_index(date: CalendarDate, calibration: &CalibrationSet) -> u8 {
    let days = whole_days_between(calibration.day_anchor, date);
    normalize_mod(calibration.day_anchor_branch as i64 + days, 12) as u8
}

/// Branch index (0..12) the officer cycle assigns to `month`.
pub fn month_branch_index(month: u8) -> u8 {
    normalize_mod(month as i64 + 2, 12) as u8
}

/// Day officer of `date` within `month`.
///
/// Total for any date and month number.
pub fn resolve_officer(date: CalendarDate, calibration: &CalibrationSet, month: u8) -> DayOfficer {
    let day_branch = day_branch_index(date, calibration) as i64;
    let month_branch = month_branch_index(month) as i64;
    DayOfficer::from_index(day_branch - month_branch)
}
