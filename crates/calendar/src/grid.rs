//! Month grid layout: a month padded with blanks to whole weeks.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::trace;

use crate::month::YearMonth;
use crate::weekday::{DAYS_PER_WEEK, weekday_distance};

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarCell {
    /// Padding before the first or after the last day of the month.
    Blank,
    /// A day of the month.
    Day(NaiveDate),
}

impl CalendarCell {
    /// Returns the date held by a [`CalendarCell::Day`].
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Blank => None,
            Self::Day(date) => Some(date),
        }
    }

    /// Returns `true` for padding cells.
    pub fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// The cells of one month, laid out row by row in weeks of seven.
///
/// The cell count is always a multiple of [`DAYS_PER_WEEK`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    week_start: Weekday,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Returns the month this grid lays out.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Returns the weekday of the first column.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// Returns the total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no cells. Never the case for a built grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the number of week rows.
    pub fn n_rows(&self) -> usize {
        self.cells.len() / DAYS_PER_WEEK
    }

    /// Iterates over week rows of exactly seven cells.
    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks_exact(DAYS_PER_WEEK)
    }

    /// Iterates over the dates of the month in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.cells.iter().filter_map(|cell| cell.date())
    }

    /// Number of blank cells before day 1.
    pub fn lead_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_blank()).count()
    }
}

/// Lays out `month` into a grid whose first column is `week_start`.
///
/// Day 1 lands in the column of its true weekday, the remaining days follow
/// in order, and the last row is padded with blanks to a full week.
///
/// # Example
///
/// ```ignore
/// let grid = build_month_grid(YearMonth::new(2025, 9)?, Weekday::Sun);
/// assert_eq!(grid.lead_blanks(), 1); // 2025-09-01 is a Monday
/// assert_eq!(grid.len(), 35);
/// ```
pub fn build_month_grid(month: YearMonth, week_start: Weekday) -> MonthGrid {
    let first = month.first_day();
    let length = usize::from(month.length_of_month());
    let lead_blanks = weekday_distance(week_start, first.weekday());
    let total = lead_blanks + length;
    let rows = total.div_ceil(DAYS_PER_WEEK);
    let tail_blanks = rows * DAYS_PER_WEEK - total;

    let mut cells = Vec::with_capacity(rows * DAYS_PER_WEEK);
    cells.extend(std::iter::repeat_n(CalendarCell::Blank, lead_blanks));
    cells.extend(first.iter_days().take(length).map(CalendarCell::Day));
    cells.extend(std::iter::repeat_n(CalendarCell::Blank, tail_blanks));

    trace!(
        month = %month,
        lead_blanks,
        tail_blanks,
        rows,
        "built month grid"
    );

    MonthGrid {
        month,
        week_start,
        cells,
    }
}
