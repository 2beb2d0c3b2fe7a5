//! Pure conversion functions: TOML config and CLI strings -> crate types.

use anyhow::{Context, Result};

use shiftcal_calendar::{Weekday, YearMonth, parse_weekday};
use shiftcal_settings::LabelKinds;

use crate::config::{CalendarToml, LabelsToml};

/// Resolves the first grid column from a CLI override or the config.
pub fn resolve_week_start(cli: Option<&str>, calendar: &CalendarToml) -> Result<Weekday> {
    let name = cli.unwrap_or(&calendar.week_start);
    parse_weekday(name).with_context(|| format!("bad week start: {name:?}"))
}

/// Resolves the cycle phase offset from a CLI override or the config.
pub fn resolve_offset(cli: Option<i64>, calendar: &CalendarToml) -> i64 {
    cli.unwrap_or(calendar.start_offset)
}

/// Applies `--next` / `--prev` to the selected month.
pub fn step_month(month: YearMonth, next: bool, prev: bool) -> Result<YearMonth> {
    let stepped = match (next, prev) {
        (true, _) => month.next_month(),
        (_, true) => month.prev_month(),
        _ => Ok(month),
    };
    stepped.with_context(|| format!("no month next to {month}"))
}

/// Builds the label classifier from the `[labels]` table.
pub fn build_label_kinds(labels: &LabelsToml) -> LabelKinds {
    LabelKinds::new(labels.day.clone(), labels.night.clone())
}
