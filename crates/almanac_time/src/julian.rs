//! Julian Day Number ↔ proleptic Gregorian calendar conversions.
//!
//! Integer-only, counted in 400-year eras with floor division so the
//! mapping stays exact for negative years. A JDN names the civil day that
//! begins at the preceding midnight, so JDN 2451545 is 2000-01-01.

/// JDN of 1970-01-01.
pub const JDN_UNIX_EPOCH: i64 = 2_440_588;

/// Seconds per civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days in one 400-year Gregorian era.
const DAYS_PER_ERA: i64 = 146_097;

/// Days from 0000-03-01 to 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or 0 if `month` is not in 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Convert a Gregorian date to its Julian Day Number.
///
/// The input is not validated; callers go through [`crate::CalendarDate`].
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    // Years start in March so the leap day is the last day of the year.
    let m = month as i64;
    let y = year as i64 - i64::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT + JDN_UNIX_EPOCH
}

/// Convert a Julian Day Number back to `(year, month, day)`.
///
/// Years beyond the `i32` range saturate.
pub fn jdn_to_gregorian(jdn: i64) -> (i32, u32, u32) {
    let z = jdn - JDN_UNIX_EPOCH + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    let year = year.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    (year, month as u32, day as u32)
}
