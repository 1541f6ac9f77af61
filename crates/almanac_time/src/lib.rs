//! Calendar-date primitives for the almanac engine.
//!
//! This crate provides:
//! - Julian Day Number ↔ proleptic Gregorian conversions
//! - `CalendarDate`, a validated (year, month, day) value ordered by JDN
//! - `ReferenceZone`, a fixed UTC offset used to pin instants to local noon
//!
//! Everything here is whole-day arithmetic. There is no time-of-day state:
//! a date read from an instant is taken at local noon of the reference zone,
//! so offsets and daylight-saving shifts can never move it across midnight.

pub mod date;
pub mod error;
pub mod julian;
pub mod zone;

pub use date::{CalendarDate, parse_month_day};
pub use error::TimeError;
pub use julian::{
    JDN_UNIX_EPOCH, SECONDS_PER_DAY, days_in_month, gregorian_to_jdn, is_leap_year,
    jdn_to_gregorian,
};
pub use zone::ReferenceZone;

/// Signed number of whole days from `from` to `to`.
///
/// Negative when `to` precedes `from`.
pub fn whole_days_between(from: CalendarDate, to: CalendarDate) -> i64 {
    to.jdn() - from.jdn()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_days_forward_and_back() {
        let a = CalendarDate::new(2024, 2, 10).unwrap();
        let b = CalendarDate::new(2024, 3, 10).unwrap();
        assert_eq!(whole_days_between(a, b), 29);
        assert_eq!(whole_days_between(b, a), -29);
        assert_eq!(whole_days_between(a, a), 0);
    }
}
