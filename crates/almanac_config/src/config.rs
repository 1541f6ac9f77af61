use std::borrow::Cow;
use std::path::Path;

use almanac_base::{BUILTIN_SETS, CalibrationSet, CalibrationTable, YearAnchor, YearBoundary};
use almanac_time::{CalendarDate, ReferenceZone};
use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level almanac configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Engine options.
    #[serde(default)]
    pub engine: EngineToml,

    /// Extra calibration sets, added to or replacing the built-in ones.
    #[serde(default)]
    pub calibration: Vec<CalibrationToml>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineToml {
    #[serde(default)]
    pub year_boundary: BoundaryToml,
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    #[serde(default = "default_max_auspicious")]
    pub max_auspicious: usize,
    #[serde(default = "default_max_inauspicious")]
    pub max_inauspicious: usize,
}

impl Default for EngineToml {
    fn default() -> Self {
        Self {
            year_boundary: BoundaryToml::default(),
            utc_offset_minutes: default_utc_offset_minutes(),
            max_auspicious: default_max_auspicious(),
            max_inauspicious: default_max_inauspicious(),
        }
    }
}

fn default_utc_offset_minutes() -> i32 {
    ReferenceZone::CHINA_STANDARD.offset_minutes()
}
fn default_max_auspicious() -> usize {
    15
}
fn default_max_inauspicious() -> usize {
    10
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryToml {
    #[default]
    LunarNewYear,
    SpringBegins,
}

impl From<BoundaryToml> for YearBoundary {
    fn from(b: BoundaryToml) -> Self {
        match b {
            BoundaryToml::LunarNewYear => YearBoundary::LunarNewYear,
            BoundaryToml::SpringBegins => YearBoundary::SpringBegins,
        }
    }
}

/// One `[[calibration]]` entry.
///
/// Anchors left out are taken from the first built-in set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationToml {
    pub version: String,
    pub lunar_year: i32,
    /// `YYYY-MM-DD` of month 1 day 1.
    pub new_year: String,
    pub month_lengths: Vec<u8>,
    #[serde(default)]
    pub leap_month: Option<u8>,
    #[serde(default)]
    pub day_anchor: Option<String>,
    #[serde(default)]
    pub day_anchor_branch: Option<u8>,
    #[serde(default)]
    pub year_anchor: Option<YearAnchorToml>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YearAnchorToml {
    pub year: i32,
    pub stem: u8,
    pub branch: u8,
}

impl CalibrationToml {
    /// Convert to a [`CalibrationSet`]; the set itself is validated on insert.
    pub fn to_set(&self) -> Result<CalibrationSet, ConfigError> {
        let fallback = &BUILTIN_SETS[0];
        let day_anchor = match &self.day_anchor {
            Some(s) => s.parse::<CalendarDate>()?,
            None => fallback.day_anchor,
        };
        let year_anchor = self.year_anchor.map_or(fallback.year_anchor, |a| YearAnchor {
            year: a.year,
            stem: a.stem,
            branch: a.branch,
        });
        Ok(CalibrationSet {
            version: Cow::Owned(self.version.clone()),
            lunar_year: self.lunar_year,
            new_year: self.new_year.parse()?,
            month_lengths: Cow::Owned(self.month_lengths.clone()),
            leap_month: self.leap_month,
            day_anchor,
            day_anchor_branch: self.day_anchor_branch.unwrap_or(fallback.day_anchor_branch),
            year_anchor,
        })
    }
}

impl AlmanacConfig {
    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse TOML text and check value ranges.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// List caps may be 0: an empty list renders the 诸事不宜 marker.
    fn validate(&self) -> Result<(), ConfigError> {
        self.reference_zone()?;
        let mut years: Vec<i32> = self.calibration.iter().map(|c| c.lunar_year).collect();
        years.sort_unstable();
        if let Some(pair) = years.windows(2).find(|w| w[0] == w[1]) {
            return Err(ConfigError::Invalid(format!(
                "lunar year {} has more than one [[calibration]] entry",
                pair[0]
            )));
        }
        Ok(())
    }

    /// Reference zone built from `engine.utc_offset_minutes`.
    pub fn reference_zone(&self) -> Result<ReferenceZone, ConfigError> {
        Ok(ReferenceZone::new(self.engine.utc_offset_minutes)?)
    }

    pub fn year_boundary(&self) -> YearBoundary {
        self.engine.year_boundary.into()
    }

    /// Built-in calibration table with this file's sets applied in order.
    pub fn calibration_table(&self) -> Result<CalibrationTable, ConfigError> {
        let mut table = CalibrationTable::builtin();
        for entry in &self.calibration {
            table.insert(entry.to_set()?)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AlmanacConfig::from_toml_str("").unwrap();
        assert_eq!(config, AlmanacConfig::default());
        assert_eq!(config.engine.max_auspicious, 15);
        assert_eq!(config.engine.max_inauspicious, 10);
        assert_eq!(config.year_boundary(), YearBoundary::LunarNewYear);
        assert_eq!(config.reference_zone().unwrap(), ReferenceZone::CHINA_STANDARD);
    }

    #[test]
    fn engine_section() {
        let config = AlmanacConfig::from_toml_str(
            r#"
            [engine]
            year_boundary = "spring-begins"
            utc_offset_minutes = 0
            max_auspicious = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.year_boundary(), YearBoundary::SpringBegins);
        assert_eq!(config.reference_zone().unwrap(), ReferenceZone::UTC);
        assert_eq!(config.engine.max_auspicious, 4);
        assert_eq!(config.engine.max_inauspicious, 10);
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = AlmanacConfig::from_toml_str("[engine]\nmax_lucky = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn zero_cap_renders_marker() {
        let config = AlmanacConfig::from_toml_str("[engine]\nmax_inauspicious = 0\n").unwrap();
        assert_eq!(config.engine.max_inauspicious, 0);
        let activities = almanac_base::lookup_activities(almanac_base::DayOfficer::Jian);
        assert_eq!(
            almanac_base::render_tokens(activities.inauspicious, config.engine.max_inauspicious),
            almanac_base::join_phrase(almanac_base::NOTHING_ADVISED)
        );
    }

    #[test]
    fn duplicate_calibration_year_rejected() {
        let entry = r#"
            [[calibration]]
            version = "lunar-2027/local"
            lunar_year = 2027
            new_year = "2027-02-06"
            month_lengths = [29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 29]
        "#;
        let err = AlmanacConfig::from_toml_str(&format!("{entry}{entry}")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn bad_offset_rejected() {
        let err = AlmanacConfig::from_toml_str("[engine]\nutc_offset_minutes = 5000\n").unwrap_err();
        assert!(matches!(err, ConfigError::Time(_)));
    }

    #[test]
    fn calibration_entry_fills_anchors() {
        let config = AlmanacConfig::from_toml_str(
            r#"
            [[calibration]]
            version = "lunar-2027/local"
            lunar_year = 2027
            new_year = "2027-02-06"
            month_lengths = [29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 29]
            "#,
        )
        .unwrap();
        let set = config.calibration[0].to_set().unwrap();
        assert_eq!(set.day_anchor, BUILTIN_SETS[0].day_anchor);
        assert_eq!(set.year_anchor, BUILTIN_SETS[0].year_anchor);
        let table = config.calibration_table().unwrap();
        assert_eq!(table.explicit(2027).map(|s| s.version.as_ref()), Some("lunar-2027/local"));
    }

    #[test]
    fn discontinuous_entry_rejected() {
        let config = AlmanacConfig::from_toml_str(
            r#"
            [[calibration]]
            version = "bad"
            lunar_year = 2027
            new_year = "2027-02-07"
            month_lengths = [29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 29]
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.calibration_table(),
            Err(ConfigError::Calibration(_))
        ));
    }

    #[test]
    fn bad_date_rejected() {
        let config = AlmanacConfig::from_toml_str(
            r#"
            [[calibration]]
            version = "bad"
            lunar_year = 2027
            new_year = "2027-02-30"
            month_lengths = [30]
            "#,
        )
        .unwrap();
        assert!(matches!(config.calibration_table(), Err(ConfigError::Time(_))));
    }
}
