mod cli;
mod config;
mod convert;
mod day_cmd;
mod logging;
mod month_cmd;
mod render;
mod roster_cmd;
mod settings_cmd;

use std::process;

use anyhow::Result;
use chrono::Local;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::ShiftcalConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ShiftcalConfig::load(cli.config.as_deref())?;
    let today = Local::now().date_naive();

    match cli.command {
        Command::Month(args) => month_cmd::run(args, &config, today),
        Command::Day(args) => day_cmd::run(args, &config, today),
        Command::Cycle(args) => settings_cmd::run_cycle(args, &config),
        Command::Times(args) => settings_cmd::run_times(args, &config, today),
        Command::History => settings_cmd::run_history(&config),
        Command::Workplace(args) => settings_cmd::run_workplace(args, &config),
        Command::Roster(args) => roster_cmd::run(args, &config),
    }
}
