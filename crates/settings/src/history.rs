//! Per-month start-time history and label-to-start-time resolution.
//!
//! The history is persisted in its compact text form
//! `YYYY-MM=DAY|NIGHT,YYYY-MM=DAY|NIGHT`, e.g. `2025-09=09:00|22:00`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use shiftcal_calendar::YearMonth;
use tracing::debug;

use crate::time::ClockTime;

/// Day and night start times recorded for one month.
///
/// Either part may be missing in stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartTimes {
    /// Start time for day shifts.
    pub day: Option<ClockTime>,
    /// Start time for night shifts.
    pub night: Option<ClockTime>,
}

impl StartTimes {
    /// Both start times set.
    pub fn new(day: ClockTime, night: ClockTime) -> Self {
        Self {
            day: Some(day),
            night: Some(night),
        }
    }

    /// Parses a `DAY|NIGHT` pair. Unparsable parts become `None`.
    pub fn parse(s: &str) -> Self {
        let mut parts = s.split('|').map(str::trim);
        let day = parts.next().and_then(|p| p.parse().ok());
        let night = parts.next().and_then(|p| p.parse().ok());
        Self { day, night }
    }
}

impl fmt::Display for StartTimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(day) = self.day {
            write!(f, "{day}")?;
        }
        f.write_str("|")?;
        if let Some(night) = self.night {
            write!(f, "{night}")?;
        }
        Ok(())
    }
}

/// Start-time history keyed by month.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MonthHistory {
    entries: BTreeMap<YearMonth, StartTimes>,
}

impl MonthHistory {
    /// Parses the compact text form, skipping malformed entries.
    pub fn parse(s: &str) -> Self {
        let mut entries = BTreeMap::new();
        for entry in s.split(',').filter(|e| !e.trim().is_empty()) {
            let kv: Vec<&str> = entry.split('=').collect();
            if kv.len() != 2 {
                debug!(entry, "skipping malformed history entry");
                continue;
            }
            match kv[0].trim().parse::<YearMonth>() {
                Ok(month) => {
                    entries.insert(month, StartTimes::parse(kv[1].trim()));
                }
                Err(e) => debug!(entry, error = %e, "skipping history entry with bad month"),
            }
        }
        Self { entries }
    }

    /// Returns the start times recorded for `month`.
    pub fn get(&self, month: YearMonth) -> Option<StartTimes> {
        self.entries.get(&month).copied()
    }

    /// Records `times` for `month`, replacing any earlier entry.
    pub fn record(&mut self, month: YearMonth, times: StartTimes) {
        self.entries.insert(month, times);
    }

    /// Iterates over entries, newest month first.
    pub fn newest_first(&self) -> impl Iterator<Item = (YearMonth, StartTimes)> + '_ {
        self.entries.iter().rev().map(|(m, t)| (*m, *t))
    }

    /// Number of recorded months.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no month is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for MonthHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (month, times)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{month}={times}")?;
        }
        Ok(())
    }
}

impl From<String> for MonthHistory {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<MonthHistory> for String {
    fn from(value: MonthHistory) -> Self {
        value.to_string()
    }
}

/// How a cycle label relates to the configured start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftKind {
    /// Annotated with the day start time.
    Day,
    /// Annotated with the night start time.
    Night,
    /// Rest days and anything else; no start time.
    Other,
}

/// Label lists that classify cycle labels into [`ShiftKind`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelKinds {
    day: Vec<String>,
    night: Vec<String>,
}

impl LabelKinds {
    /// Creates a classifier from day and night label lists.
    pub fn new(day: Vec<String>, night: Vec<String>) -> Self {
        Self { day, night }
    }

    /// Classifies `label`. Night labels win if a label is listed twice.
    pub fn kind_of(&self, label: &str) -> ShiftKind {
        if self.night.iter().any(|l| l == label) {
            ShiftKind::Night
        } else if self.day.iter().any(|l| l == label) {
            ShiftKind::Day
        } else {
            ShiftKind::Other
        }
    }
}

impl Default for LabelKinds {
    fn default() -> Self {
        Self::new(vec!["주".to_string()], vec!["야".to_string()])
    }
}
