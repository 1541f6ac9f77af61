//! Error types for configuration loading.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use almanac_base::CalibrationError;
use almanac_time::TimeError;

/// Errors from reading or applying a configuration file.
#[derive(Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`crate::AlmanacConfig`].
    Toml(toml::de::Error),
    /// A date field failed to parse.
    Time(TimeError),
    /// An extra calibration set was rejected.
    Calibration(CalibrationError),
    /// A value is out of range.
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Toml(e) => write!(f, "invalid config: {e}"),
            Self::Time(e) => write!(f, "invalid date in config: {e}"),
            Self::Calibration(e) => write!(f, "invalid calibration set: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config value: {msg}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Toml(e) => Some(e),
            Self::Time(e) => Some(e),
            Self::Calibration(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<TimeError> for ConfigError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<CalibrationError> for ConfigError {
    fn from(e: CalibrationError) -> Self {
        Self::Calibration(e)
    }
}
