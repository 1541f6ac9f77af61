//! Pure calendrical resolvers for the almanac engine.
//!
//! This crate provides:
//! - Calibration anchors and a lunar-year calibration table
//! - Sexagenary (stem-branch) year and zodiac animal
//! - Approximate lunar month/day
//! - Jian-Chu day officers and their 宜/忌 activity lists
//! - Day deities (值神) with 黄道/黑道, and the day clash (冲煞)
//! - Word-joiner rendering of activity phrases
//! - Western zodiac sign and trait pair
//!
//! Every resolver is total: any valid `CalendarDate` yields a value. Only
//! user-supplied calibration data can be rejected.

pub mod activities;
pub mod calibration;
pub mod clash;
pub mod deity;
pub mod error;
pub mod fmt;
pub mod lunar;
pub mod officer;
pub mod phrase;
pub mod sexagenary;
pub mod util;
pub mod zodiac;

pub use activities::{ACTIVITY_TABLE, ActivityPair, NOTHING_ADVISED, lookup_activities};
pub use calibration::{
    BUILTIN_SETS, CalibrationSet, CalibrationTable, LUNATIONS_PER_YEAR, SYNODIC_MONTH_DAYS,
};
pub use clash::{DayClash, Direction, clash_for_branch, resolve_clash};
pub use deity::{ALL_DEITIES, DayDeity, DeityPath, qinglong_branch, resolve_deity};
pub use error::CalibrationError;
pub use fmt::{day_name, month_name};
pub use lunar::{LunarDate, lunar_new_year, lunar_year_for, resolve_lunar};
pub use officer::{
    ALL_OFFICERS, DayOfficer, JIE_START_DAYS, day_branch_index, month_branch_index,
    resolve_officer, solar_month,
};
pub use phrase::{WORD_JOINER, join_phrase, render_phrases, render_tokens};
pub use sexagenary::{
    ALL_ANIMALS, ALL_BRANCHES, ALL_STEMS, Animal, Branch, SPRING_BEGINS_MONTH_DAY, SexagenaryYear,
    Stem, YearAnchor, YearBoundary, resolve_year, sexagenary_from_year, year_cutover,
};
pub use util::normalize_mod;
pub use zodiac::{ALL_SIGNS, TraitPair, ZodiacSign, resolve_zodiac, traits_for, traits_for_name};
