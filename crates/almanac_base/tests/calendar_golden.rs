//! Integration tests for the calendrical resolvers against known dates.

use std::borrow::Cow;

use almanac_base::{
    Animal, BUILTIN_SETS, CalibrationTable, DayOfficer, LunarDate, YearBoundary, resolve_lunar,
    resolve_officer, resolve_year, solar_month, year_cutover,
};
use almanac_time::CalendarDate;

fn d(y: i32, m: u32, day: u32) -> CalendarDate {
    CalendarDate::new(y, m, day).unwrap()
}

fn officer(table: &CalibrationTable, date: CalendarDate) -> DayOfficer {
    resolve_officer(date, &table.for_date(date), solar_month(date))
}

// ---------------------------------------------------------------------------
// Day officers
// ---------------------------------------------------------------------------

#[test]
fn officers_around_day_anchor() {
    let table = CalibrationTable::builtin();
    assert_eq!(officer(&table, d(2024, 2, 9)), DayOfficer::Bi);
    assert_eq!(officer(&table, d(2024, 2, 10)), DayOfficer::Jian);
    assert_eq!(officer(&table, d(2024, 2, 11)), DayOfficer::Chu);
}

#[test]
fn officer_is_deterministic() {
    let table = CalibrationTable::builtin();
    let date = d(2025, 7, 19);
    assert_eq!(officer(&table, date), officer(&table, date));
}

#[test]
fn officer_advances_except_on_jie_days() {
    let table = CalibrationTable::builtin();
    let mut date = d(2023, 1, 1);
    let end = d(2027, 1, 1);
    while date < end {
        let next = date.succ();
        let (a, b) = (officer(&table, date), officer(&table, next));
        if solar_month(next) == solar_month(date) {
            assert_eq!(b, a.next(), "{date} -> {next}");
        } else {
            assert_eq!(b, a, "jie day {next}");
        }
        date = next;
    }
}

// ---------------------------------------------------------------------------
// Lunar dates
// ---------------------------------------------------------------------------

#[test]
fn reference_date_is_twelfth_month_thirteenth() {
    let table = CalibrationTable::builtin();
    let date = d(2026, 1, 31);
    let lunar = resolve_lunar(date, &table.for_date(date));
    assert_eq!(
        lunar,
        LunarDate {
            month: 12,
            leap: false,
            day: 13
        }
    );
    assert_eq!(lunar.to_string(), "腊月十三");
}

#[test]
fn new_year_eve_and_day() {
    let table = CalibrationTable::builtin();
    let eve = d(2024, 2, 9);
    let eve_lunar = resolve_lunar(eve, &table.for_date(eve));
    assert_eq!((eve_lunar.month, eve_lunar.day), (12, 30));
    assert_eq!(eve_lunar.to_string(), "腊月三十");

    let ny = d(2024, 2, 10);
    assert_eq!(resolve_lunar(ny, &table.for_date(ny)), LunarDate::NEW_YEAR);
}

#[test]
fn calibrated_years_never_leave_range() {
    let table = CalibrationTable::builtin();
    let mut date = d(2023, 1, 22);
    let end = d(2027, 2, 6);
    let mut prev = resolve_lunar(date, &table.for_date(date));
    while date < end {
        date = date.succ();
        let cur = resolve_lunar(date, &table.for_date(date));
        assert!((1..=30).contains(&cur.day), "{date}");
        if cur.day != 1 {
            assert_eq!(cur.day, prev.day + 1, "{date}");
            assert_eq!((cur.month, cur.leap), (prev.month, prev.leap), "{date}");
        }
        prev = cur;
    }
}

/// Walk `from..to` and check every day follows the previous one in the
/// lunar calendar: the next day of the same month, or day 1 after a
/// 29- or 30-day month.
fn assert_lunar_continuous(table: &CalibrationTable, from: CalendarDate, to: CalendarDate) {
    let lunar = |date: CalendarDate| resolve_lunar(date, &table.for_date(date));
    let mut date = from;
    let mut prev = lunar(date);
    while date < to {
        date = date.succ();
        let cur = lunar(date);
        if cur.day == 1 {
            assert!(prev.day >= 29, "{date}: {prev} -> {cur}");
            assert_ne!((cur.month, cur.leap), (prev.month, prev.leap), "{date}");
        } else {
            assert_eq!(cur.day, prev.day + 1, "{date}: {prev} -> {cur}");
            assert_eq!((cur.month, cur.leap), (prev.month, prev.leap), "{date}");
        }
        prev = cur;
    }
}

#[test]
fn lunar_dates_continue_across_calibration_seams() {
    let table = CalibrationTable::builtin();
    // Approximated 2021-2022, explicit 2023-2026, approximated 2027-2030.
    assert_lunar_continuous(&table, d(2021, 1, 1), d(2031, 1, 1));
}

#[test]
fn inserted_short_year_hands_over_to_approximation() {
    let mut table = CalibrationTable::builtin();
    let mut set = BUILTIN_SETS[3].clone();
    set.version = Cow::Borrowed("lunar-2027/short");
    set.lunar_year = 2027;
    set.new_year = d(2027, 2, 6);
    // 353 days, ending 2028-01-25.
    set.month_lengths = Cow::Borrowed(&[29, 30, 29, 30, 29, 30, 29, 30, 29, 29, 30, 29]);
    table.insert(set).unwrap();

    let eve = d(2028, 1, 24);
    assert_eq!(resolve_lunar(eve, &table.for_date(eve)).to_string(), "腊月廿九");
    let ny = d(2028, 1, 25);
    assert_eq!(resolve_lunar(ny, &table.for_date(ny)), LunarDate::NEW_YEAR);
    assert_eq!(table.for_date(ny).version, "approx-2028/from-lunar-2027/short");
    assert_lunar_continuous(&table, d(2027, 1, 1), d(2030, 3, 1));
}

#[test]
fn approximated_year_starts_on_first_day() {
    let table = CalibrationTable::builtin();
    for year in [1990, 2010, 2040] {
        let ny = table.new_year(year);
        assert_eq!(resolve_lunar(ny, &table.for_date(ny)), LunarDate::NEW_YEAR, "{year}");
    }
}

// ---------------------------------------------------------------------------
// Sexagenary years
// ---------------------------------------------------------------------------

#[test]
fn year_flips_at_lunar_new_year() {
    let table = CalibrationTable::builtin();
    for (year, before, after) in [(2024, "癸卯", "甲辰"), (2025, "甲辰", "乙巳"), (2026, "乙巳", "丙午")] {
        let cutover = year_cutover(year, YearBoundary::LunarNewYear, &table);
        let set = table.for_date(cutover);
        assert_eq!(resolve_year(cutover.pred(), cutover, &set).name(), before);
        assert_eq!(resolve_year(cutover, cutover, &set).name(), after);
    }
}

#[test]
fn reference_dates_year_and_animal() {
    let table = CalibrationTable::builtin();
    let y = |date: CalendarDate| {
        let cutover = year_cutover(date.year(), YearBoundary::LunarNewYear, &table);
        resolve_year(date, cutover, &table.for_date(date))
    };
    let jan31 = y(d(2026, 1, 31));
    assert_eq!(jan31.name(), "乙巳");
    assert_eq!(jan31.animal, Animal::Snake);
    let feb17 = y(d(2026, 2, 17));
    assert_eq!(feb17.name(), "丙午");
    assert_eq!(feb17.animal, Animal::Horse);
}

#[test]
fn spring_begins_boundary() {
    let table = CalibrationTable::builtin();
    let cutover = year_cutover(2026, YearBoundary::SpringBegins, &table);
    let set = table.for_date(d(2026, 2, 4));
    assert_eq!(resolve_year(d(2026, 2, 3), cutover, &set).name(), "乙巳");
    assert_eq!(resolve_year(d(2026, 2, 4), cutover, &set).name(), "丙午");
}
