use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shiftcal_calendar::{NaiveDate, YearMonth};

/// shiftcal personal work-shift calendar.
#[derive(Parser)]
#[command(
    name = "shiftcal",
    version,
    about = "Repeating work-shift cycle laid out on a month calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: shiftcal.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the shift calendar for a month.
    Month(MonthArgs),
    /// Show the shift summary for one day.
    Day(DayArgs),
    /// Show the work cycle, or replace it.
    Cycle(CycleArgs),
    /// Set default start times and record them for a month.
    Times(TimesArgs),
    /// List start times recorded per month, newest first.
    History,
    /// Show or change the workplace.
    Workplace(WorkplaceArgs),
    /// Manage shift types and routines.
    Roster(RosterArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Month to show as YYYY-MM (default: current month).
    #[arg(short, long)]
    pub month: Option<YearMonth>,

    /// First weekday column, e.g. sunday or mon (overrides config).
    #[arg(short, long)]
    pub week_start: Option<String>,

    /// Cycle phase offset (overrides config).
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<i64>,

    /// Show the month after the selected one.
    #[arg(long, conflicts_with = "prev")]
    pub next: bool,

    /// Show the month before the selected one.
    #[arg(long)]
    pub prev: bool,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Date as YYYY-MM-DD (default: today).
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Cycle phase offset (overrides config).
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<i64>,
}

/// Arguments for the `cycle` subcommand.
#[derive(clap::Args)]
pub struct CycleArgs {
    /// New comma-separated cycle, e.g. "주,주,야,야,휴,휴".
    pub csv: Option<String>,
}

/// Arguments for the `times` subcommand.
#[derive(clap::Args)]
pub struct TimesArgs {
    /// Day shift start time (HH:mm).
    #[arg(long)]
    pub day: String,

    /// Night shift start time (HH:mm).
    #[arg(long)]
    pub night: String,

    /// Month to record the times for as YYYY-MM (default: current month).
    #[arg(short, long)]
    pub month: Option<YearMonth>,
}

/// Arguments for the `workplace` subcommand.
#[derive(clap::Args)]
pub struct WorkplaceArgs {
    /// Action to take (default: list).
    #[command(subcommand)]
    pub action: Option<WorkplaceAction>,
}

/// Workplace actions.
#[derive(Subcommand)]
pub enum WorkplaceAction {
    /// List workplaces and mark the selected one.
    List,
    /// Select the next workplace in the list.
    Toggle,
    /// Select a workplace by name.
    Select {
        /// Workplace name.
        name: String,
    },
    /// Replace the workplace list from a comma-separated string.
    Set {
        /// Comma-separated workplace names.
        csv: String,
    },
}

/// Arguments for the `roster` subcommand.
#[derive(clap::Args)]
pub struct RosterArgs {
    /// Action to take (default: show).
    #[command(subcommand)]
    pub action: Option<RosterAction>,
}

/// Roster actions.
#[derive(Subcommand)]
pub enum RosterAction {
    /// List shift types and routines.
    Show,
    /// Add the default shift types and routine to an empty roster.
    Seed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_month_args() {
        let cli = Cli::try_parse_from([
            "shiftcal", "month", "--month", "2025-09", "-w", "mon", "--offset", "-2",
        ])
        .unwrap();
        match cli.command {
            Command::Month(args) => {
                assert_eq!(args.month, Some(YearMonth::new(2025, 9).unwrap()));
                assert_eq!(args.week_start.as_deref(), Some("mon"));
                assert_eq!(args.offset, Some(-2));
            }
            _ => panic!("expected month command"),
        }
    }

    #[test]
    fn month_navigation_flags() {
        let cli = Cli::try_parse_from(["shiftcal", "month", "--month", "2025-12", "--next"]).unwrap();
        match cli.command {
            Command::Month(args) => assert!(args.next && !args.prev),
            _ => panic!("expected month command"),
        }
        assert!(Cli::try_parse_from(["shiftcal", "month", "--next", "--prev"]).is_err());
    }

    #[test]
    fn day_accepts_negative_offset() {
        let cli = Cli::try_parse_from(["shiftcal", "day", "--date", "2025-09-03", "--offset", "-1"])
            .unwrap();
        match cli.command {
            Command::Day(args) => assert_eq!(args.offset, Some(-1)),
            _ => panic!("expected day command"),
        }
    }

    #[test]
    fn rejects_bad_month() {
        assert!(Cli::try_parse_from(["shiftcal", "month", "--month", "2025-13"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["shiftcal", "history", "-vv", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
