use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Chinese almanac and zodiac lookups.
#[derive(Parser)]
#[command(name = "almanac", version, about = "Chinese almanac and zodiac lookups")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Almanac for one day
    Day {
        /// Date (YYYY-MM-DD); today in the reference zone if omitted
        #[arg(long)]
        date: Option<String>,
        /// Birth month/day (MM-DD) for the Western zodiac; defaults to the date
        #[arg(long)]
        birth: Option<String>,
    },
    /// One line per day for a whole Gregorian year
    Year {
        /// Gregorian year
        year: i32,
        /// Birth month/day (MM-DD) for the Western zodiac
        #[arg(long)]
        birth: Option<String>,
    },
    /// Western zodiac sign and traits of a birth day
    Zodiac {
        /// Birth month/day (MM-DD)
        birth: String,
    },
    /// Show calibration sets
    Calibration {
        /// Show the set used for this lunar year, explicit or approximated
        #[arg(long)]
        year: Option<i32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_day_with_globals() {
        let cli = Cli::try_parse_from([
            "almanac", "-vv", "day", "--date", "2026-01-31", "--birth", "08-23",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Day { date, birth } => {
                assert_eq!(date.as_deref(), Some("2026-01-31"));
                assert_eq!(birth.as_deref(), Some("08-23"));
            }
            _ => panic!("expected day"),
        }
    }

    #[test]
    fn config_after_subcommand() {
        let cli = Cli::try_parse_from(["almanac", "year", "2025", "--config", "a.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
        assert!(matches!(cli.command, Command::Year { year: 2025, .. }));
    }

    #[test]
    fn zodiac_requires_birth() {
        assert!(Cli::try_parse_from(["almanac", "zodiac"]).is_err());
    }
}
