//! Plain-text rendering of month grids and day summaries.

use std::fmt::Write;

use chrono::Datelike;
use shiftcal_calendar::{CalendarCell, Cycle, MonthGrid, NaiveDate, Weekday, week_sequence};
use shiftcal_settings::ClockTime;

/// Placeholder shown where a value does not apply.
pub const NONE_MARK: &str = "—";

/// Short Korean weekday name used in the header row.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    }
}

/// Renders a month title such as `2025년 9월`.
pub fn month_title(grid: &MonthGrid) -> String {
    let month = grid.month();
    format!("{}년 {}월", month.year(), month.month())
}

/// Renders `grid` as tab-separated rows with each day's cycle label.
///
/// `today`, when inside the month, is marked with `*`.
pub fn render_month(
    grid: &MonthGrid,
    cycle: &Cycle,
    start_offset: i64,
    today: Option<NaiveDate>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", month_title(grid));
    let header: Vec<&str> = week_sequence(grid.week_start())
        .into_iter()
        .map(weekday_label)
        .collect();
    let _ = writeln!(out, "{}", header.join("\t"));

    for row in grid.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                CalendarCell::Blank => String::new(),
                CalendarCell::Day(date) => {
                    let marker = if Some(*date) == today { "*" } else { "" };
                    format!(
                        "{}{marker} {}",
                        date.day(),
                        cycle.label_with_offset(*date, start_offset)
                    )
                }
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join("\t").trim_end());
    }
    out
}

/// Everything shown for a single selected day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary<'a> {
    pub date: NaiveDate,
    pub workplace: &'a str,
    pub label: &'a str,
    pub start: Option<ClockTime>,
}

/// Renders the summary card for one day.
pub fn render_day(summary: &DaySummary<'_>) -> String {
    let start = summary
        .start
        .map(|t| t.to_string())
        .unwrap_or_else(|| NONE_MARK.to_string());
    format!(
        "근무 상태\n날짜: {}\n근무지: {}\n근무: {}\n출근: {}\n",
        summary.date, summary.workplace, summary.label, start
    )
}
