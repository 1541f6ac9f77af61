//! Day deities (值神) and the 黄道/黑道 split.
//!
//! Twelve deities rotate one per day, starting from 青龙. Where 青龙 falls
//! depends on the month branch:
//!
//! ```text
//! 寅/申 → 子   卯/酉 → 寅   辰/戌 → 辰
//! 巳/亥 → 午   子/午 → 申   丑/未 → 戌
//! ```
//!
//! which is `2 * ((month_branch - 2) mod 6)`. Day and month branches are the
//! ones the officer cycle uses, so a deity always keeps the same distance
//! from the day's officer within one solar month.

use almanac_time::CalendarDate;

use crate::calibration::CalibrationSet;
use crate::officer::{day_branch_index, month_branch_index};
use crate::util::{cyclic_index, normalize_mod};

/// The twelve day deities in cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayDeity {
    /// 青龙 Azure Dragon
    QingLong,
    /// 明堂 Bright Hall
    MingTang,
    /// 天刑 Heavenly Punishment
    TianXing,
    /// 朱雀 Vermilion Bird
    ZhuQue,
    /// 金匮 Golden Coffer
    JinKui,
    /// 天德 Heavenly Virtue
    TianDe,
    /// 白虎 White Tiger
    BaiHu,
    /// 玉堂 Jade Hall
    YuTang,
    /// 天牢 Heavenly Prison
    TianLao,
    /// 玄武 Black Tortoise
    XuanWu,
    /// 司命 Life Keeper
    SiMing,
    /// 勾陈 Hook Array
    GouChen,
}

/// All 12 deities in order (0 = 青龙).
pub const ALL_DEITIES: [DayDeity; 12] = [
    DayDeity::QingLong,
    DayDeity::MingTang,
    DayDeity::TianXing,
    DayDeity::ZhuQue,
    DayDeity::JinKui,
    DayDeity::TianDe,
    DayDeity::BaiHu,
    DayDeity::YuTang,
    DayDeity::TianLao,
    DayDeity::XuanWu,
    DayDeity::SiMing,
    DayDeity::GouChen,
];

/// Whether a deity marks a 黄道 (auspicious) or 黑道 (inauspicious) day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeityPath {
    Yellow,
    Black,
}

impl DeityPath {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yellow => "黄道",
            Self::Black => "黑道",
        }
    }
}

impl DayDeity {
    /// Two-character Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::QingLong => "青龙",
            Self::MingTang => "明堂",
            Self::TianXing => "天刑",
            Self::ZhuQue => "朱雀",
            Self::JinKui => "金匮",
            Self::TianDe => "天德",
            Self::BaiHu => "白虎",
            Self::YuTang => "玉堂",
            Self::TianLao => "天牢",
            Self::XuanWu => "玄武",
            Self::SiMing => "司命",
            Self::GouChen => "勾陈",
        }
    }

    /// 0-based index (青龙=0 .. 勾陈=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Deity at any signed position, wrapped into the cycle.
    pub const fn from_index(i: i64) -> Self {
        ALL_DEITIES[cyclic_index(i, 12)]
    }

    pub const fn path(self) -> DeityPath {
        match self {
            Self::QingLong
            | Self::MingTang
            | Self::JinKui
            | Self::TianDe
            | Self::YuTang
            | Self::SiMing => DeityPath::Yellow,
            Self::TianXing
            | Self::ZhuQue
            | Self::BaiHu
            | Self::TianLao
            | Self::XuanWu
            | Self::GouChen => DeityPath::Black,
        }
    }
}

/// Branch index on which 青龙 falls in a month with branch `month_branch`.
pub fn qinglong_branch(month_branch: u8) -> u8 {
    (2 * normalize_mod(month_branch as i64 - 2, 6)) as u8
}

/// Day deity of `date` within solar `month`.
pub fn resolve_deity(date: CalendarDate, calibration: &CalibrationSet, month: u8) -> DayDeity {
    let day_branch = day_branch_index(date, calibration) as i64;
    let start = qinglong_branch(month_branch_index(month)) as i64;
    DayDeity::from_index(day_branch - start)
}
