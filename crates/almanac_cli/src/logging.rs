//! stderr logging for the `almanac` binary.
//!
//! `-v` reports config loading and year generation, `-vv` adds a note for
//! every day resolved against an approximated calibration set, `-vvv` adds
//! per-year tracing from the assembly crate.

use tracing_subscriber::EnvFilter;

/// Engine crates whose events the binary shows.
const ENGINE_TARGETS: &[&str] = &[
    "almanac",
    "almanac_base",
    "almanac_config",
    "almanac_search",
    "almanac_time",
];

/// Filter directive for a `-v` count: warn, info, debug, then trace.
fn directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    ENGINE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the subscriber. `RUST_LOG`, when set, replaces the `-v` level.
///
/// Almanac rows go to stdout, so log lines are written to stderr.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        assert!(directives(0).starts_with("almanac=warn,"));
    }

    #[test]
    fn each_flag_raises_every_target() {
        assert!(directives(2).split(',').all(|d| d.ends_with("=debug")));
        assert_eq!(directives(9), directives(3));
        assert_eq!(directives(1).split(',').count(), ENGINE_TARGETS.len());
    }
}
