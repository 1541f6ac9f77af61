//! Integration tests for loading configuration from disk.

use std::path::PathBuf;

use almanac_base::YearBoundary;
use almanac_config::{AlmanacConfig, ConfigError};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("almanac_config_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_file() {
    let path = scratch_file(
        "almanac.toml",
        "[engine]\nyear_boundary = \"spring-begins\"\nmax_auspicious = 5\n",
    );
    let config = AlmanacConfig::load(&path).unwrap();
    assert_eq!(config.year_boundary(), YearBoundary::SpringBegins);
    assert_eq!(config.engine.max_auspicious, 5);
    assert!(config.calibration_table().is_ok());
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("almanac_config_test_missing/none.toml");
    let err = AlmanacConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("none.toml"));
}

#[test]
fn malformed_file_is_toml_error() {
    let path = scratch_file("broken.toml", "[engine\n");
    assert!(matches!(AlmanacConfig::load(&path), Err(ConfigError::Toml(_))));
}
