//! Record types for shift types, routines and per-period overrides.

use serde::{Deserialize, Serialize};

/// A kind of shift with optional default working hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftType {
    /// Record id, assigned on insert.
    pub id: u64,
    /// Display name, e.g. `주간`.
    pub name: String,
    /// Default start, in minutes after midnight.
    pub default_start_minutes: Option<u32>,
    /// Default end, in minutes after midnight. May be earlier than the start
    /// for shifts that run past midnight.
    pub default_end_minutes: Option<u32>,
}

/// A named repeating pattern of shift types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    /// Record id, assigned on insert.
    pub id: u64,
    /// Display name, e.g. `주주야야휴휴`.
    pub name: String,
    /// Number of days in one repetition.
    pub length: u32,
    /// Workplace the routine belongs to, if any.
    pub workplace: Option<String>,
    /// Whether this is the routine in use.
    pub is_active: bool,
}

/// The shift type worked on one day of a routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineEntry {
    /// Record id, assigned on insert.
    pub id: u64,
    /// Owning routine.
    pub routine_id: u64,
    /// Position within the routine, starting at 0.
    pub day_index: u32,
    /// Shift type worked on that day.
    pub shift_type_id: u64,
}

/// The workplace chosen for a whole year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyWorkplace {
    /// Calendar year; unique.
    pub year: i32,
    /// Selected workplace.
    pub workplace: String,
}

/// A night-shift start time that applies to one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyNightOverride {
    /// Record id, assigned on insert.
    pub id: u64,
    /// Calendar year.
    pub year: i32,
    /// Month (1..=12).
    pub month: u8,
    /// Workplace the override applies to, if restricted.
    pub workplace: Option<String>,
    /// Night start, in minutes after midnight.
    pub night_start_minutes: u32,
}
