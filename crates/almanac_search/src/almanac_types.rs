//! Types for assembled almanac results.

use almanac_base::{
    DayClash, DayDeity, DayOfficer, LunarDate, SexagenaryYear, TraitPair, YearBoundary, ZodiacSign,
};
use almanac_time::CalendarDate;

/// Caps on rendered activity lists.
pub const DEFAULT_MAX_AUSPICIOUS: usize = 15;
pub const DEFAULT_MAX_INAUSPICIOUS: usize = 10;

/// Options for one almanac computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlmanacOptions {
    /// Which date starts a new stem-branch year.
    pub year_boundary: YearBoundary,
    /// Most 宜 phrases rendered.
    pub max_auspicious: usize,
    /// Most 忌 phrases rendered.
    pub max_inauspicious: usize,
}

impl Default for AlmanacOptions {
    fn default() -> Self {
        Self {
            year_boundary: YearBoundary::LunarNewYear,
            max_auspicious: DEFAULT_MAX_AUSPICIOUS,
            max_inauspicious: DEFAULT_MAX_INAUSPICIOUS,
        }
    }
}

/// Where the calibration set used for a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalibrationProvenance {
    /// An explicit set covers the lunar year.
    Explicit,
    /// The set was derived by the generic approximation.
    Approximated,
}

impl CalibrationProvenance {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Approximated => "approximated",
        }
    }
}

/// Birth month/day used for the Western zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDay {
    pub month: u32,
    pub day: u32,
}

impl BirthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

/// Everything the almanac says about one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlmanacResult {
    /// The Gregorian date asked about.
    pub date: CalendarDate,
    /// Stem-branch year and animal.
    pub year: SexagenaryYear,
    /// Gregorian year in which the containing lunar year began.
    pub lunar_year: i32,
    /// Lunar month/day.
    pub lunar: LunarDate,
    /// Jian-Chu officer of the day.
    pub officer: DayOfficer,
    /// Solar (节) month governing the officer, 1 = 寅 month.
    pub solar_month: u8,
    /// 值神 of the day; its path gives 黄道/黑道.
    pub deity: DayDeity,
    /// 冲煞 of the day.
    pub clash: DayClash,
    /// Rendered 宜 phrases.
    pub auspicious: String,
    /// Rendered 忌 phrases.
    pub inauspicious: String,
    /// Western sign of the birth day.
    pub zodiac: ZodiacSign,
    /// Trait pair of `zodiac`.
    pub traits: TraitPair,
    /// Version label of the calibration set used.
    pub calibration_version: String,
    pub provenance: CalibrationProvenance,
    /// Display label, e.g. `乙巳蛇年 · 腊月十三 [满日]`.
    pub label: String,
}
