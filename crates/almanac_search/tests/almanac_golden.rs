//! Golden tests for assembled almanac results.

use almanac_base::{
    Animal, CalibrationTable, DayOfficer, LunarDate, NOTHING_ADVISED, WORD_JOINER, YearBoundary,
    ZodiacSign,
};
use almanac_search::{
    AlmanacOptions, BirthDay, CalibrationProvenance, almanac_for_date, almanac_for_year,
    compute_almanac,
};
use almanac_time::CalendarDate;

fn d(y: i32, m: u32, day: u32) -> CalendarDate {
    CalendarDate::new(y, m, day).unwrap()
}

fn plain(s: &str) -> String {
    s.chars().filter(|&c| c != WORD_JOINER).collect()
}

#[test]
fn reference_day_2026_01_31() {
    let r = compute_almanac(d(2026, 1, 31), 8, 23);
    assert_eq!(r.year.name(), "乙巳");
    assert_eq!(r.year.animal, Animal::Snake);
    assert_eq!(r.lunar_year, 2025);
    assert_eq!(
        r.lunar,
        LunarDate {
            month: 12,
            leap: false,
            day: 13
        }
    );
    assert_eq!(r.officer, DayOfficer::Man);
    assert_eq!(r.label, "乙巳蛇年 · 腊月十三 [满日]");
    assert_eq!(plain(&r.auspicious), "祈福 祭祀 开市 交易 纳财 嫁娶");
    assert_eq!(r.zodiac, ZodiacSign::Virgo);
    assert_eq!(r.traits.caution, "Self-critical");
    assert_eq!(r.provenance, CalibrationProvenance::Explicit);
    assert_eq!(r.calibration_version, "lunar-2025/v1");
}

#[test]
fn lunar_new_year_2026() {
    let r = compute_almanac(d(2026, 2, 17), 3, 21);
    assert_eq!(r.year.name(), "丙午");
    assert_eq!(r.year.animal, Animal::Horse);
    assert_eq!(r.lunar, LunarDate::NEW_YEAR);
    assert_eq!(r.label, "丙午马年 · 正月初一 [破日]");
    assert_eq!(r.zodiac, ZodiacSign::Aries);
}

#[test]
fn officer_scenario_around_2024_new_year() {
    let officers: Vec<DayOfficer> = [d(2024, 2, 9), d(2024, 2, 10), d(2024, 2, 11)]
        .into_iter()
        .map(|date| compute_almanac(date, 1, 1).officer)
        .collect();
    assert_eq!(officers, [DayOfficer::Bi, DayOfficer::Jian, DayOfficer::Chu]);
}

#[test]
fn new_year_eve_2024() {
    let r = compute_almanac(d(2024, 2, 9), 1, 1);
    assert_eq!(r.label, "癸卯兔年 · 腊月三十 [闭日]");
    assert_eq!(r.calibration_version, "lunar-2023/v1");
}

#[test]
fn spring_begins_option_moves_year_only() {
    let table = CalibrationTable::builtin();
    let options = AlmanacOptions {
        year_boundary: YearBoundary::SpringBegins,
        ..AlmanacOptions::default()
    };
    let r = almanac_for_date(d(2026, 2, 10), BirthDay::new(1, 1), &options, &table);
    assert_eq!(r.year.name(), "丙午");
    assert_eq!(r.lunar.month, 12);
    assert_eq!(r.lunar_year, 2025);
}

#[test]
fn caps_limit_rendered_phrases() {
    let table = CalibrationTable::builtin();
    let options = AlmanacOptions {
        max_auspicious: 2,
        max_inauspicious: 1,
        ..AlmanacOptions::default()
    };
    let r = almanac_for_date(d(2026, 1, 31), BirthDay::new(1, 1), &options, &table);
    assert_eq!(plain(&r.auspicious), "祈福 祭祀");
    assert_eq!(plain(&r.inauspicious), "上任");
}

#[test]
fn zero_cap_renders_marker() {
    let table = CalibrationTable::builtin();
    let options = AlmanacOptions {
        max_auspicious: 0,
        ..AlmanacOptions::default()
    };
    let r = almanac_for_date(d(2026, 1, 31), BirthDay::new(1, 1), &options, &table);
    assert_eq!(plain(&r.auspicious), NOTHING_ADVISED);
}

#[test]
fn uncalibrated_year_is_approximated() {
    let r = compute_almanac(d(1990, 6, 1), 6, 1);
    assert_eq!(r.provenance, CalibrationProvenance::Approximated);
    assert!(r.calibration_version.starts_with("approx-1990"));
    assert_eq!(r.year.name(), "庚午");
    assert!((1..=30).contains(&r.lunar.day));
}

#[test]
fn whole_year_is_consecutive() {
    let table = CalibrationTable::builtin();
    let rows = almanac_for_year(2024, BirthDay::new(1, 1), &AlmanacOptions::default(), &table)
        .unwrap();
    assert_eq!(rows.len(), 366);
    assert_eq!(rows[0].date, d(2024, 1, 1));
    assert_eq!(rows[365].date, d(2024, 12, 31));
    for pair in rows.windows(2) {
        assert_eq!(pair[1].date, pair[0].date.succ());
    }
    let new_year = rows.iter().position(|r| r.lunar == LunarDate::NEW_YEAR);
    assert_eq!(new_year, Some(40)); // 2024-02-10
}

#[test]
fn results_are_deterministic() {
    let a = compute_almanac(d(2025, 9, 9), 9, 9);
    let b = compute_almanac(d(2025, 9, 9), 9, 9);
    assert_eq!(a, b);
}
