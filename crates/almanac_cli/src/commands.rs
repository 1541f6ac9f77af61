//! Subcommand implementations.

use std::fmt::Write as _;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use almanac_base::{CalibrationSet, CalibrationTable, month_name, resolve_zodiac, traits_for};
use almanac_config::AlmanacConfig;
use almanac_search::{
    AlmanacOptions, AlmanacResult, BirthDay, CalibrationProvenance, almanac_for_date,
    almanac_for_year,
};
use almanac_time::{CalendarDate, ReferenceZone, parse_month_day};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Options, zone and calibration shared by every subcommand.
pub struct Session {
    pub options: AlmanacOptions,
    pub zone: ReferenceZone,
    pub table: CalibrationTable,
}

impl Session {
    /// Load from a config file, or use defaults when none is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                info!(path = %path.display(), "loading config");
                AlmanacConfig::load(path)
                    .with_context(|| format!("failed to load config: {}", path.display()))?
            }
            None => AlmanacConfig::default(),
        };
        Self::from_config(&config)
    }

    fn from_config(config: &AlmanacConfig) -> Result<Self> {
        let table = config
            .calibration_table()
            .context("failed to build calibration table")?;
        debug!(sets = table.sets().len(), "calibration table ready");
        Ok(Self {
            options: AlmanacOptions {
                year_boundary: config.year_boundary(),
                max_auspicious: config.engine.max_auspicious,
                max_inauspicious: config.engine.max_inauspicious,
            },
            zone: config.reference_zone()?,
            table,
        })
    }
}

pub fn day(session: &Session, date: Option<&str>, birth: Option<&str>) -> Result<()> {
    let date = match date {
        Some(s) => parse_date(s)?,
        None => today(session.zone)?,
    };
    let birth = parse_birth(birth, date)?;
    let result = almanac_for_date(date, birth, &session.options, &session.table);
    print!("{}", format_day(&result));
    Ok(())
}

pub fn year(session: &Session, year: i32, birth: Option<&str>) -> Result<()> {
    let first = CalendarDate::new(year, 1, 1).with_context(|| format!("invalid year: {year}"))?;
    let birth = parse_birth(birth, first)?;
    info!(year, "generating year");
    for row in almanac_for_year(year, birth, &session.options, &session.table)? {
        println!("{}  {}", row.date, row.label);
    }
    Ok(())
}

pub fn zodiac(birth: &str) -> Result<()> {
    let (month, day) =
        parse_month_day(birth).with_context(|| format!("invalid birth day: {birth:?}"))?;
    let sign = resolve_zodiac(month, day);
    let traits = traits_for(sign);
    println!("{}: {} / {}", sign.name(), traits.strength, traits.caution);
    Ok(())
}

pub fn calibration(session: &Session, year: Option<i32>) -> Result<()> {
    match year {
        Some(y) => {
            let set = session.table.get(y);
            let provenance = if session.table.explicit(y).is_some() {
                CalibrationProvenance::Explicit
            } else {
                CalibrationProvenance::Approximated
            };
            print!("{}", format_set_detail(&set, provenance));
        }
        None => {
            for set in session.table.sets() {
                println!("{}", format_set_summary(set));
            }
        }
    }
    Ok(())
}

fn parse_date(s: &str) -> Result<CalendarDate> {
    s.parse::<CalendarDate>()
        .with_context(|| format!("invalid date: {s:?}"))
}

fn today(zone: ReferenceZone) -> Result<CalendarDate> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before 1970")?;
    zone.date_at(now.as_secs() as i64).context("current date outside the supported range")
}

/// Birth day from `MM-DD`, or the month/day of `fallback`.
fn parse_birth(birth: Option<&str>, fallback: CalendarDate) -> Result<BirthDay> {
    match birth {
        Some(s) => {
            let (month, day) =
                parse_month_day(s).with_context(|| format!("invalid birth day: {s:?}"))?;
            Ok(BirthDay::new(month, day))
        }
        None => Ok(BirthDay::new(fallback.month(), fallback.day())),
    }
}

fn format_day(r: &AlmanacResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "date         {}", r.date);
    let _ = writeln!(out, "label        {}", r.label);
    let _ = writeln!(
        out,
        "year         {} {} (cycle {} of 60)",
        r.year.name(),
        r.year.animal.english_name(),
        r.year.cycle_index() + 1
    );
    let _ = writeln!(out, "lunar        {} of lunar year {}", r.lunar, r.lunar_year);
    let _ = writeln!(
        out,
        "officer      {} {} (solar month {})",
        r.officer.name(),
        r.officer.pinyin(),
        r.solar_month
    );
    let _ = writeln!(
        out,
        "deity        {} ({})  {}",
        r.deity.name(),
        r.deity.path().name(),
        r.clash
    );
    let _ = writeln!(out, "auspicious   {}", r.auspicious);
    let _ = writeln!(out, "inauspicious {}", r.inauspicious);
    let _ = writeln!(
        out,
        "zodiac       {}: {} / {}",
        r.zodiac.name(),
        r.traits.strength,
        r.traits.caution
    );
    let _ = writeln!(
        out,
        "calibration  {} ({})",
        r.calibration_version,
        r.provenance.name()
    );
    out
}

fn format_set_summary(set: &CalibrationSet) -> String {
    let leap = match set.leap_month {
        Some(m) => format!(", leap {}", month_name(m, true)),
        None => String::new(),
    };
    format!(
        "{:<16} lunar year {}  new year {}  {} months{}  {} days",
        set.version,
        set.lunar_year,
        set.new_year,
        set.month_lengths.len(),
        leap,
        set.year_length()
    )
}

fn format_set_detail(set: &CalibrationSet, provenance: CalibrationProvenance) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", format_set_summary(set), provenance.name());
    let mut start = set.new_year;
    for (slot, &len) in set.month_lengths.iter().enumerate() {
        let (month, leap) = set.month_at(slot);
        let _ = writeln!(out, "  {:<6} {}  {} days", month_name(month, leap), start, len);
        start = start.add_days(len as i64);
    }
    out
}
