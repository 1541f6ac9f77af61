mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::Session;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let session = Session::load(cli.config.as_deref())?;
    match cli.command {
        Command::Day { date, birth } => commands::day(&session, date.as_deref(), birth.as_deref()),
        Command::Year { year, birth } => commands::year(&session, year, birth.as_deref()),
        Command::Zodiac { birth } => commands::zodiac(&birth),
        Command::Calibration { year } => commands::calibration(&session, year),
    }
}
