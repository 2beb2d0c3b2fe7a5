//! # shiftcal-roster
//!
//! A small record store for shift metadata: shift types with default hours,
//! routines made of per-day shift types, the workplace chosen for each year
//! and per-month night start overrides. The store is a plain JSON document
//! with explicit [`Roster::load`] / [`Roster::save`].
//!
//! A routine converts to a [`shiftcal_calendar::Cycle`] of shift type names
//! via [`Roster::routine_cycle`], so it can drive the month calendar the same
//! way a user-entered cycle does.

mod error;
mod records;
mod roster;

pub use error::RosterError;
pub use records::{MonthlyNightOverride, Routine, RoutineEntry, ShiftType, YearlyWorkplace};
pub use roster::{DEFAULT_ROUTINE_NAME, Roster};
