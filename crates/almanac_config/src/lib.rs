//! TOML configuration for the almanac engine.
//!
//! ```toml
//! [engine]
//! year_boundary = "lunar-new-year"   # or "spring-begins"
//! utc_offset_minutes = 480
//! max_auspicious = 15
//! max_inauspicious = 10
//!
//! [[calibration]]
//! version = "lunar-2027/local"
//! lunar_year = 2027
//! new_year = "2027-02-06"
//! month_lengths = [29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 29]
//! ```
//!
//! Every key is optional; an empty file yields the defaults.

pub mod config;
pub mod error;

pub use config::{AlmanacConfig, BoundaryToml, CalibrationToml, EngineToml, YearAnchorToml};
pub use error::ConfigError;
