//! Day command: the shift, workplace and start time for one date.

use anyhow::Result;
use tracing::{debug, info_span};

use shiftcal_calendar::{NaiveDate, YearMonth};
use shiftcal_settings::SettingsStore;

use crate::cli::DayArgs;
use crate::config::ShiftcalConfig;
use crate::convert;
use crate::render::{self, DaySummary};

/// Print the summary for the requested day.
pub fn run(args: DayArgs, config: &ShiftcalConfig, today: NaiveDate) -> Result<()> {
    let _cmd = info_span!("day").entered();

    let date = args.date.unwrap_or(today);
    let offset = convert::resolve_offset(args.offset, &config.calendar);
    let kinds = convert::build_label_kinds(&config.labels);

    let store = SettingsStore::open(&config.store.settings);
    let cycle = store.cycle();
    let label = cycle.label_with_offset(date, offset);
    let start = store.start_time_for(label, YearMonth::of(date), &kinds);
    debug!(%date, label, ?start, "resolved day");

    let summary = DaySummary {
        date,
        workplace: store.workplaces().current(),
        label,
        start,
    };
    print!("{}", render::render_day(&summary));
    Ok(())
}
