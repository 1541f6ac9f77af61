//! Day clash (冲) and 煞 direction.
//!
//! A day clashes with the branch opposite its own, six places on, and so
//! with that branch's animal. The 煞 direction follows the day branch's
//! triad: 申子辰 south, 亥卯未 west, 寅午戌 north, 巳酉丑 east.

use std::fmt::{Display, Formatter};

use almanac_time::CalendarDate;

use crate::calibration::CalibrationSet;
use crate::officer::day_branch_index;
use crate::sexagenary::{Animal, Branch};
use crate::util::cyclic_index;

/// Compass direction of the day's 煞.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Single-character Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "北",
            Self::East => "东",
            Self::South => "南",
            Self::West => "西",
        }
    }
}

/// 煞 direction indexed by day branch mod 4 (子 = 0).
const SHA_BY_BRANCH: [Direction; 4] = [
    Direction::South,
    Direction::East,
    Direction::North,
    Direction::West,
];

/// The branch and animal a day clashes with, and its 煞 direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayClash {
    pub branch: Branch,
    pub animal: Animal,
    pub sha: Direction,
}

impl Display for DayClash {
    /// `冲戌狗煞南`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "冲{}{}煞{}",
            self.branch.name(),
            self.animal.name(),
            self.sha.name()
        )
    }
}

/// Clash of a day whose branch index is `day_branch`.
pub fn clash_for_branch(day_branch: u8) -> DayClash {
    let branch = Branch::from_index(day_branch as i64 + 6);
    DayClash {
        branch,
        animal: branch.animal(),
        sha: SHA_BY_BRANCH[cyclic_index(day_branch as i64, 4)],
    }
}

/// Clash of `date`.
pub fn resolve_clash(date: CalendarDate, calibration: &CalibrationSet) -> DayClash {
    clash_for_branch(day_branch_index(date, calibration))
}
