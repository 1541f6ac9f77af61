//! Daily almanac assembly.
//!
//! This crate provides:
//! - `compute_almanac`, the single-day entry point with built-in calibration
//! - `almanac_for_date` / `almanac_for_instant` with explicit options and table
//! - `almanac_for_year`, whole-year pregeneration
//!
//! Results are fresh values; nothing is cached between calls.

pub mod almanac;
pub mod almanac_types;

pub use almanac::{
    almanac_for_date, almanac_for_instant, almanac_for_year, compute_almanac, day_label,
};
pub use almanac_types::{
    AlmanacOptions, AlmanacResult, BirthDay, CalibrationProvenance, DEFAULT_MAX_AUSPICIOUS,
    DEFAULT_MAX_INAUSPICIOUS,
};
