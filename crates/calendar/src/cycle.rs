//! Repeating shift cycle and per-date label assignment.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Floor modulo: the remainder of `a / m` in `[0, m)`, also for negative `a`.
///
/// # Panics
///
/// Panics if `m` is not positive.
pub fn floor_mod(a: i64, m: i64) -> i64 {
    assert!(m > 0, "floor_mod modulus must be positive");
    a.rem_euclid(m)
}

/// Index into a cycle of length `len` for `date` shifted by `start_offset`.
///
/// The index keys off the day of month, so the phase restarts on day 1 of
/// every month.
fn cycle_index(date: NaiveDate, len: usize, start_offset: i64) -> usize {
    let len = len as i64;
    // Reducing the offset first keeps the sum far from i64 overflow.
    let a = i64::from(date.day0()) + floor_mod(start_offset, len);
    floor_mod(a, len) as usize
}

/// Returns the label of `cycle` that applies to `date`.
///
/// `start_offset` biases the phase; pass 0 for the plain mapping where day 1
/// of every month takes the first label.
///
/// # Errors
///
/// Returns [`CalendarError::EmptyCycle`] if `cycle` has no labels.
pub fn cycle_label_for<S: AsRef<str>>(
    date: NaiveDate,
    cycle: &[S],
    start_offset: i64,
) -> Result<&str, CalendarError> {
    if cycle.is_empty() {
        return Err(CalendarError::EmptyCycle);
    }
    Ok(cycle[cycle_index(date, cycle.len(), start_offset)].as_ref())
}

/// A non-empty, ordered sequence of shift labels repeated day after day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycle {
    labels: Vec<String>,
}

impl Cycle {
    /// Creates a cycle from its labels in order.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyCycle`] if `labels` is empty.
    pub fn new<I, S>(labels: I) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(CalendarError::EmptyCycle);
        }
        Ok(Self { labels })
    }

    /// Parses a comma-separated cycle such as `"주,주,야,야,휴,휴"`.
    ///
    /// Entries are trimmed and empty entries dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyCycle`] if no label remains.
    pub fn from_csv(csv: &str) -> Result<Self, CalendarError> {
        Self::new(csv.split(',').map(str::trim).filter(|s| !s.is_empty()))
    }

    /// Returns the labels in cycle order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the cycle length. Always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Renders the cycle back to its comma-separated form.
    pub fn to_csv(&self) -> String {
        self.labels.join(",")
    }

    /// Returns the label for `date` with no phase offset.
    pub fn label_for(&self, date: NaiveDate) -> &str {
        self.label_with_offset(date, 0)
    }

    /// Returns the label for `date` with the phase shifted by `start_offset`.
    pub fn label_with_offset(&self, date: NaiveDate, start_offset: i64) -> &str {
        &self.labels[cycle_index(date, self.labels.len(), start_offset)]
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_csv())
    }
}
