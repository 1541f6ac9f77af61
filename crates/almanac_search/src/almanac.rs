//! Almanac assembly.
//!
//! Each resolver in `almanac_base` runs on its own; this module only picks
//! the calibration set, feeds the resolvers, and renders the result.

use std::sync::LazyLock;

use almanac_base::{
    CalibrationTable, DayOfficer, LunarDate, SexagenaryYear, lookup_activities, render_tokens,
    resolve_clash, resolve_deity, resolve_lunar, resolve_officer, resolve_year, resolve_zodiac,
    solar_month, traits_for, year_cutover,
};
use almanac_time::{CalendarDate, ReferenceZone, TimeError, days_in_month, is_leap_year};
use tracing::{debug, trace};

use crate::almanac_types::{AlmanacOptions, AlmanacResult, BirthDay, CalibrationProvenance};

static BUILTIN_TABLE: LazyLock<CalibrationTable> = LazyLock::new(CalibrationTable::builtin);

/// Year used to clamp birth days; a leap year keeps February 29.
const BIRTH_CLAMP_YEAR: i32 = 2000;

/// Compute the almanac for `date` with the built-in calibration table and
/// default options.
pub fn compute_almanac(date: CalendarDate, birth_month: u32, birth_day: u32) -> AlmanacResult {
    almanac_for_date(
        date,
        BirthDay::new(birth_month, birth_day),
        &AlmanacOptions::default(),
        &BUILTIN_TABLE,
    )
}

/// Compute the almanac for `date`.
pub fn almanac_for_date(
    date: CalendarDate,
    birth: BirthDay,
    options: &AlmanacOptions,
    table: &CalibrationTable,
) -> AlmanacResult {
    let lunar_year = table.lunar_year_for(date);
    let calibration = table.get(lunar_year);
    let provenance = if table.explicit(lunar_year).is_some() {
        CalibrationProvenance::Explicit
    } else {
        debug!(
            %date,
            lunar_year,
            version = %calibration.version,
            "no explicit calibration set, using approximation"
        );
        CalibrationProvenance::Approximated
    };

    let cutover = year_cutover(date.year(), options.year_boundary, table);
    let year = resolve_year(date, cutover, &calibration);
    let lunar = resolve_lunar(date, &calibration);
    let solar_month = solar_month(date);
    let officer = resolve_officer(date, &calibration, solar_month);
    let deity = resolve_deity(date, &calibration, solar_month);
    let clash = resolve_clash(date, &calibration);

    let activities = lookup_activities(officer);
    let auspicious = render_tokens(activities.auspicious, options.max_auspicious);
    let inauspicious = render_tokens(activities.inauspicious, options.max_inauspicious);

    let birth_day = clamp_birth_day(birth);
    let zodiac = resolve_zodiac(birth.month, birth_day);

    AlmanacResult {
        date,
        year,
        lunar_year,
        lunar,
        officer,
        solar_month,
        deity,
        clash,
        auspicious,
        inauspicious,
        zodiac,
        traits: traits_for(zodiac),
        calibration_version: calibration.version.to_string(),
        provenance,
        label: day_label(&year, &lunar, officer),
    }
}

/// Compute the almanac for the calendar day containing a Unix instant, read
/// in `zone`.
///
/// Fails only when the instant lies outside the supported year range.
pub fn almanac_for_instant(
    unix_seconds: i64,
    zone: ReferenceZone,
    birth: BirthDay,
    options: &AlmanacOptions,
    table: &CalibrationTable,
) -> Result<AlmanacResult, TimeError> {
    let date = zone.date_at(unix_seconds)?;
    Ok(almanac_for_date(date, birth, options, table))
}

/// Compute the almanac for every day of Gregorian `year`, in date order.
///
/// Fails only when `year` lies outside the supported range.
pub fn almanac_for_year(
    year: i32,
    birth: BirthDay,
    options: &AlmanacOptions,
    table: &CalibrationTable,
) -> Result<Vec<AlmanacResult>, TimeError> {
    let days = if is_leap_year(year) { 366 } else { 365 };
    let first = CalendarDate::new(year, 1, 1)?;
    let results: Vec<AlmanacResult> = (0..days)
        .map(|i| almanac_for_date(first.add_days(i), birth, options, table))
        .collect();
    trace!(year, days = results.len(), "generated year");
    Ok(results)
}

/// `乙巳蛇年 · 腊月十三 [满日]`
pub fn day_label(year: &SexagenaryYear, lunar: &LunarDate, officer: DayOfficer) -> String {
    format!("{year} · {lunar} [{}日]", officer.name())
}

fn clamp_birth_day(birth: BirthDay) -> u32 {
    let max = days_in_month(BIRTH_CLAMP_YEAR, birth.month).max(1);
    birth.day.clamp(1, max)
}
