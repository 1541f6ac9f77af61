//! Sexagenary (60-year stem-branch) year resolution.
//!
//! Ten heavenly stems and twelve earthly branches advance together, one step
//! per year, so a year is named by `(offset mod 10, offset mod 12)` counted
//! from a year whose stem and branch are known. The zodiac animal shares the
//! branch index.

use std::fmt::{Display, Formatter};

use almanac_time::CalendarDate;

use crate::calibration::{CalibrationSet, CalibrationTable};
use crate::util::{cyclic_index, normalize_mod};

/// The ten heavenly stems (天干), 甲 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese character of the stem.
    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// Stem at any signed position, wrapped into the cycle.
    pub const fn from_index(i: i64) -> Self {
        ALL_STEMS[cyclic_index(i, 10)]
    }
}

/// The twelve earthly branches (地支), 子 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese character of the branch.
    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Branch at any signed position, wrapped into the cycle.
    pub const fn from_index(i: i64) -> Self {
        ALL_BRANCHES[cyclic_index(i, 12)]
    }

    /// Zodiac animal tied to this branch.
    pub const fn animal(self) -> Animal {
        ALL_ANIMALS[self.index() as usize]
    }
}

/// The twelve zodiac animals (生肖), indexed like [`Branch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 animals in branch order.
pub const ALL_ANIMALS: [Animal; 12] = [
    Animal::Rat,
    Animal::Ox,
    Animal::Tiger,
    Animal::Rabbit,
    Animal::Dragon,
    Animal::Snake,
    Animal::Horse,
    Animal::Goat,
    Animal::Monkey,
    Animal::Rooster,
    Animal::Dog,
    Animal::Pig,
];

impl Animal {
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese name, e.g. "蛇".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "鼠",
            Self::Ox => "牛",
            Self::Tiger => "虎",
            Self::Rabbit => "兔",
            Self::Dragon => "龙",
            Self::Snake => "蛇",
            Self::Horse => "马",
            Self::Goat => "羊",
            Self::Monkey => "猴",
            Self::Rooster => "鸡",
            Self::Dog => "狗",
            Self::Pig => "猪",
        }
    }

    /// English name, e.g. "Snake".
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

/// A year whose stem and branch are known exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearAnchor {
    pub year: i32,
    pub stem: u8,
    pub branch: u8,
}

impl YearAnchor {
    /// 1984 = 甲子, start of the current cycle.
    pub const JIAZI_1984: Self = Self {
        year: 1984,
        stem: 0,
        branch: 0,
    };
}

/// A resolved sexagenary year.
///
/// `animal` always carries the same index as `branch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SexagenaryYear {
    /// Gregorian year the designation belongs to.
    pub year: i32,
    pub stem: Stem,
    pub branch: Branch,
    pub animal: Animal,
}

impl SexagenaryYear {
    /// Position in the 60-cycle, 甲子 = 0 .. 癸亥 = 59.
    pub fn cycle_index(&self) -> u8 {
        // Chinese remainder for (stem mod 10, branch mod 12).
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        normalize_mod(6 * s - 5 * b, 60) as u8
    }

    /// Two-character stem-branch name, e.g. "甲辰".
    pub fn name(&self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }
}

impl Display for SexagenaryYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}年", self.name(), self.animal.name())
    }
}

/// Which Gregorian date starts a new stem-branch year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearBoundary {
    /// Lunar new year (正月初一) of each Gregorian year.
    #[default]
    LunarNewYear,
    /// 立春, approximated as a fixed February 4.
    SpringBegins,
}

/// Fixed month/day used for [`YearBoundary::SpringBegins`].
pub const SPRING_BEGINS_MONTH_DAY: (u32, u32) = (2, 4);

/// Name the stem-branch year for an effective Gregorian year.
pub fn sexagenary_from_year(effective_year: i32, anchor: &YearAnchor) -> SexagenaryYear {
    let offset = effective_year as i64 - anchor.year as i64;
    let stem = Stem::from_index(anchor.stem as i64 + offset);
    let branch = Branch::from_index(anchor.branch as i64 + offset);
    SexagenaryYear {
        year: effective_year,
        stem,
        branch,
        animal: branch.animal(),
    }
}

/// First day of the stem-branch year that begins in Gregorian `year`.
pub fn year_cutover(year: i32, boundary: YearBoundary, table: &CalibrationTable) -> CalendarDate {
    match boundary {
        YearBoundary::LunarNewYear => table.new_year(year),
        YearBoundary::SpringBegins => {
            let (m, d) = SPRING_BEGINS_MONTH_DAY;
            CalendarDate::from_ymd(year, m, d)
        }
    }
}

/// Resolve the sexagenary year of `date`.
///
/// `cutover` marks the first day of the new designation in `date`'s
/// Gregorian year; only its month and day are consulted. Dates before it
/// still belong to the previous year's designation.
pub fn resolve_year(
    date: CalendarDate,
    cutover: CalendarDate,
    calibration: &CalibrationSet,
) -> SexagenaryYear {
    let effective_year = if date.is_before_month_day(cutover.month(), cutover.day()) {
        date.year() - 1
    } else {
        date.year()
    };
    sexagenary_from_year(effective_year, &calibration.year_anchor)
}
