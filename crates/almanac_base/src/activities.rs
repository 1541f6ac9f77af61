//! Auspicious (宜) and inauspicious (忌) activities per day officer.

use crate::officer::DayOfficer;

/// Marker shown when nothing is advised for a day.
pub const NOTHING_ADVISED: &str = "诸事不宜";

/// Canonical 宜/忌 phrases for one officer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivityPair {
    pub auspicious: &'static [&'static str],
    pub inauspicious: &'static [&'static str],
}

impl ActivityPair {
    /// Pair returned for an officer without a table entry.
    pub const NEUTRAL: Self = Self {
        auspicious: &[NOTHING_ADVISED],
        inauspicious: &[NOTHING_ADVISED],
    };

    /// Auspicious phrases as one space-separated string.
    pub fn auspicious_text(&self) -> String {
        self.auspicious.join(" ")
    }

    /// Inauspicious phrases as one space-separated string.
    pub fn inauspicious_text(&self) -> String {
        self.inauspicious.join(" ")
    }
}

const fn pair(
    auspicious: &'static [&'static str],
    inauspicious: &'static [&'static str],
) -> ActivityPair {
    ActivityPair {
        auspicious,
        inauspicious,
    }
}

/// Officer → activities, one row per officer.
pub static ACTIVITY_TABLE: [(DayOfficer, ActivityPair); 12] = [
    (
        DayOfficer::Jian,
        pair(
            &["出行", "上任", "会友", "上书", "求医", "祈福"],
            &["动土", "开仓", "掘井", "乘船", "安葬"],
        ),
    ),
    (
        DayOfficer::Chu,
        pair(
            &["祭祀", "祈福", "求医", "沐浴", "扫舍", "解除"],
            &["嫁娶", "出行", "移徙", "开市"],
        ),
    ),
    (
        DayOfficer::Man,
        pair(
            &["祈福", "祭祀", "开市", "交易", "纳财", "嫁娶"],
            &["上任", "求医", "栽种", "安葬", "词讼"],
        ),
    ),
    (
        DayOfficer::Ping,
        pair(
            &["修造", "涂泥", "平治道涂", "祭祀"],
            &["开渠", "嫁娶", "栽种", "开市"],
        ),
    ),
    (
        DayOfficer::Ding,
        pair(
            &["祭祀", "祈福", "嫁娶", "纳畜", "订盟", "立券"],
            &["出行", "词讼", "栽种", "求医"],
        ),
    ),
    (
        DayOfficer::Zhi,
        pair(
            &["祭祀", "捕捉", "畋猎", "纳财", "订盟"],
            &["开市", "移徙", "出行"],
        ),
    ),
    (
        DayOfficer::Po,
        pair(
            &["破屋", "坏垣", "求医", "治病"],
            &["嫁娶", "开市", "出行", "订盟"],
        ),
    ),
    (
        DayOfficer::Wei,
        pair(
            &["祭祀", "安床", "祈福", "纳财"],
            &["登山", "乘船", "出行", "嫁娶"],
        ),
    ),
    (
        DayOfficer::Cheng,
        pair(
            &["嫁娶", "开市", "入学", "出行", "移徙", "立券", "交易"],
            &["词讼"],
        ),
    ),
    (
        DayOfficer::Shou,
        pair(
            &["纳财", "收割", "捕捉", "纳畜", "入学"],
            &["安葬", "出行", "开市", "放债"],
        ),
    ),
    (
        DayOfficer::Kai,
        pair(
            &["祭祀", "祈福", "开市", "入学", "嫁娶", "求嗣", "上任"],
            &["安葬", "破土", "伐木"],
        ),
    ),
    (
        DayOfficer::Bi,
        pair(
            &["筑堤", "补垣", "安葬", "塞穴", "收藏"],
            &["出行", "开市", "求医", "上任", "开渠"],
        ),
    ),
];

/// 宜/忌 phrases for `officer`, or [`ActivityPair::NEUTRAL`] when the table
/// has no row for it.
pub fn lookup_activities(officer: DayOfficer) -> ActivityPair {
    ACTIVITY_TABLE
        .iter()
        .find(|(o, _)| *o == officer)
        .map(|(_, p)| *p)
        .unwrap_or(ActivityPair::NEUTRAL)
}
