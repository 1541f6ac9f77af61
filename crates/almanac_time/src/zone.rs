//! Fixed-offset reference zone.
//!
//! Dates are read in one zone for the whole engine. An instant is mapped to
//! its civil day in that zone and then pinned to local noon, which keeps the
//! result 12 hours away from either midnight.

use crate::date::CalendarDate;
use crate::error::TimeError;
use crate::julian::{JDN_UNIX_EPOCH, SECONDS_PER_DAY};

/// Largest accepted offset magnitude, in minutes (UTC±14:00).
const MAX_OFFSET_MIN: i32 = 14 * 60;

/// A fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceZone {
    offset_minutes: i32,
}

impl ReferenceZone {
    /// UTC+08:00, the zone the lunar tables are reckoned in.
    pub const CHINA_STANDARD: Self = Self { offset_minutes: 480 };

    pub const UTC: Self = Self { offset_minutes: 0 };

    /// Build a zone from an offset east of UTC.
    pub fn new(offset_minutes: i32) -> Result<Self, TimeError> {
        if offset_minutes.abs() > MAX_OFFSET_MIN {
            return Err(TimeError::InvalidOffset(offset_minutes));
        }
        Ok(Self { offset_minutes })
    }

    pub const fn offset_minutes(self) -> i32 {
        self.offset_minutes
    }

    /// Civil date in this zone at the given Unix instant.
    pub fn date_at(self, unix_seconds: i64) -> Result<CalendarDate, TimeError> {
        let local = unix_seconds.saturating_add(self.offset_minutes as i64 * 60);
        CalendarDate::try_from_jdn(JDN_UNIX_EPOCH + local.div_euclid(SECONDS_PER_DAY))
    }

    /// Unix instant of local noon on `date` in this zone.
    pub fn noon_of(self, date: CalendarDate) -> i64 {
        (date.jdn() - JDN_UNIX_EPOCH) * SECONDS_PER_DAY + SECONDS_PER_DAY / 2
            - self.offset_minutes as i64 * 60
    }

    /// Re-read an instant as the local-noon instant of its civil day.
    pub fn pin_to_noon(self, unix_seconds: i64) -> Result<i64, TimeError> {
        Ok(self.noon_of(self.date_at(unix_seconds)?))
    }
}

impl Default for ReferenceZone {
    fn default() -> Self {
        Self::CHINA_STANDARD
    }
}
