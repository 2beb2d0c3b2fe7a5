//! Month command: lay out a month and annotate each day with its shift.

use anyhow::Result;
use tracing::{info, info_span};

use shiftcal_calendar::{NaiveDate, YearMonth, build_month_grid};
use shiftcal_settings::SettingsStore;

use crate::cli::MonthArgs;
use crate::config::ShiftcalConfig;
use crate::convert;
use crate::render;

/// Print the calendar for the requested month.
pub fn run(args: MonthArgs, config: &ShiftcalConfig, today: NaiveDate) -> Result<()> {
    let _cmd = info_span!("month").entered();

    let selected = args.month.unwrap_or_else(|| YearMonth::of(today));
    let month = convert::step_month(selected, args.next, args.prev)?;
    let week_start = convert::resolve_week_start(args.week_start.as_deref(), &config.calendar)?;
    let offset = convert::resolve_offset(args.offset, &config.calendar);

    let store = SettingsStore::open(&config.store.settings);
    let cycle = store.cycle();
    info!(%month, %week_start, offset, cycle = %cycle, "rendering month");

    let grid = build_month_grid(month, week_start);
    let today = month.contains(today).then_some(today);
    print!("{}", render::render_month(&grid, &cycle, offset, today));
    Ok(())
}
