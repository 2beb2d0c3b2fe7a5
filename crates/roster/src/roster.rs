//! In-memory record store persisted as a JSON document.

use std::path::Path;

use serde::{Deserialize, Serialize};
use shiftcal_calendar::Cycle;
use tracing::{debug, info};

use crate::error::RosterError;
use crate::records::{MonthlyNightOverride, Routine, RoutineEntry, ShiftType, YearlyWorkplace};

/// Shift types seeded into an empty roster: name, start and end minutes.
const DEFAULT_SHIFT_TYPES: [(&str, Option<u32>, Option<u32>); 4] = [
    ("주간", Some(9 * 60), Some(18 * 60)),
    ("야간", Some(21 * 60), Some(6 * 60)),
    ("휴무", None, None),
    ("기타", None, None),
];

/// Name of the routine seeded into an empty roster.
pub const DEFAULT_ROUTINE_NAME: &str = "주주야야휴휴";

/// Shift type names of the seeded routine, one per day.
const DEFAULT_ROUTINE_DAYS: [&str; 6] = ["주간", "주간", "야간", "야간", "휴무", "휴무"];

/// All shift-type and routine records.
///
/// Record ids are assigned from a per-table counter and never reused.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Roster {
    shift_types: Vec<ShiftType>,
    routines: Vec<Routine>,
    routine_entries: Vec<RoutineEntry>,
    yearly_workplaces: Vec<YearlyWorkplace>,
    night_overrides: Vec<MonthlyNightOverride>,
    next_id: u64,
}

/// Inserts `record` or replaces the one with the same id.
///
/// A zero id is replaced by the next free id.
fn upsert_by_id<T>(
    table: &mut Vec<T>,
    next_id: &mut u64,
    mut record: T,
    id: impl Fn(&mut T) -> &mut u64,
) -> u64 {
    if *id(&mut record) == 0 {
        *next_id += 1;
        *id(&mut record) = *next_id;
    }
    let key = *id(&mut record);
    *next_id = (*next_id).max(key);
    match table.iter_mut().position(|r| *id(r) == key) {
        Some(pos) => table[pos] = record,
        None => table.push(record),
    }
    key
}

impl Roster {
    /// Reads a roster from `path`. A missing file yields an empty roster.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Io`] if the file exists but cannot be read, or
    /// [`RosterError::Json`] if it is not a valid roster document.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        if !path.exists() {
            info!(path = %path.display(), "no roster file, starting empty");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| RosterError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let roster: Self = serde_json::from_str(&text).map_err(|e| RosterError::Json {
            reason: e.to_string(),
        })?;
        debug!(
            path = %path.display(),
            n_shift_types = roster.shift_types.len(),
            n_routines = roster.routines.len(),
            "roster loaded"
        );
        Ok(roster)
    }

    /// Writes the roster to `path` as pretty-printed JSON, creating parent
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Json`] or [`RosterError::Io`].
    pub fn save(&self, path: &Path) -> Result<(), RosterError> {
        let io_err = |e: std::io::Error| RosterError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };
        let json = serde_json::to_string_pretty(self).map_err(|e| RosterError::Json {
            reason: e.to_string(),
        })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, json).map_err(io_err)?;
        debug!(path = %path.display(), "roster saved");
        Ok(())
    }

    /// Seeds the default shift types and the active `주주야야휴휴` routine.
    ///
    /// Does nothing if any shift type already exists. Returns `true` if
    /// records were added.
    pub fn seed_defaults_if_empty(&mut self) -> bool {
        if !self.shift_types.is_empty() {
            debug!("roster already has shift types, skipping seed");
            return false;
        }
        let ids: Vec<(&str, u64)> = DEFAULT_SHIFT_TYPES
            .iter()
            .map(|&(name, start, end)| {
                let id = self.upsert_shift_type(ShiftType {
                    id: 0,
                    name: name.to_string(),
                    default_start_minutes: start,
                    default_end_minutes: end,
                });
                (name, id)
            })
            .collect();

        let routine_id = self.upsert_routine(Routine {
            id: 0,
            name: DEFAULT_ROUTINE_NAME.to_string(),
            length: DEFAULT_ROUTINE_DAYS.len() as u32,
            workplace: None,
            is_active: true,
        });
        for (day_index, day) in DEFAULT_ROUTINE_DAYS.iter().enumerate() {
            let shift_type_id = ids
                .iter()
                .find(|(name, _)| name == day)
                .map(|&(_, id)| id)
                .unwrap_or_default();
            self.upsert_routine_entry(RoutineEntry {
                id: 0,
                routine_id,
                day_index: day_index as u32,
                shift_type_id,
            });
        }
        info!(
            n_shift_types = ids.len(),
            routine = DEFAULT_ROUTINE_NAME,
            "seeded default roster"
        );
        true
    }

    /// Returns all shift types.
    pub fn shift_types(&self) -> &[ShiftType] {
        &self.shift_types
    }

    /// Returns the shift type with `id`.
    pub fn shift_type(&self, id: u64) -> Option<&ShiftType> {
        self.shift_types.iter().find(|t| t.id == id)
    }

    /// Inserts or replaces a shift type; returns its id.
    pub fn upsert_shift_type(&mut self, shift_type: ShiftType) -> u64 {
        upsert_by_id(&mut self.shift_types, &mut self.next_id, shift_type, |t| {
            &mut t.id
        })
    }

    /// Returns all routines.
    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    /// Returns the first routine marked active.
    pub fn active_routine(&self) -> Option<&Routine> {
        self.routines.iter().find(|r| r.is_active)
    }

    /// Inserts or replaces a routine; returns its id.
    pub fn upsert_routine(&mut self, routine: Routine) -> u64 {
        upsert_by_id(&mut self.routines, &mut self.next_id, routine, |r| &mut r.id)
    }

    /// Inserts or replaces a routine entry; returns its id.
    pub fn upsert_routine_entry(&mut self, entry: RoutineEntry) -> u64 {
        upsert_by_id(&mut self.routine_entries, &mut self.next_id, entry, |e| {
            &mut e.id
        })
    }

    /// Returns the entries of `routine_id` ordered by day index.
    pub fn entries_for_routine(&self, routine_id: u64) -> Vec<&RoutineEntry> {
        let mut entries: Vec<&RoutineEntry> = self
            .routine_entries
            .iter()
            .filter(|e| e.routine_id == routine_id)
            .collect();
        entries.sort_by_key(|e| e.day_index);
        entries
    }

    /// Builds the cycle of shift type names worked by `routine_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownRoutine`], [`RosterError::EmptyRoutine`]
    /// or [`RosterError::UnknownShiftType`] for dangling references.
    pub fn routine_cycle(&self, routine_id: u64) -> Result<Cycle, RosterError> {
        if !self.routines.iter().any(|r| r.id == routine_id) {
            return Err(RosterError::UnknownRoutine { id: routine_id });
        }
        let labels = self
            .entries_for_routine(routine_id)
            .into_iter()
            .map(|e| {
                self.shift_type(e.shift_type_id)
                    .map(|t| t.name.clone())
                    .ok_or(RosterError::UnknownShiftType {
                        id: e.shift_type_id,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Cycle::new(labels).map_err(|_| RosterError::EmptyRoutine { id: routine_id })
    }

    /// Returns the workplace selected for `year`.
    pub fn yearly_workplace(&self, year: i32) -> Option<&YearlyWorkplace> {
        self.yearly_workplaces.iter().find(|w| w.year == year)
    }

    /// Sets the workplace for a year, replacing any earlier choice.
    pub fn upsert_yearly_workplace(&mut self, selection: YearlyWorkplace) {
        match self
            .yearly_workplaces
            .iter_mut()
            .find(|w| w.year == selection.year)
        {
            Some(existing) => *existing = selection,
            None => self.yearly_workplaces.push(selection),
        }
    }

    /// Returns the night start override for a month.
    pub fn monthly_night_override(&self, year: i32, month: u8) -> Option<&MonthlyNightOverride> {
        self.night_overrides
            .iter()
            .find(|o| o.year == year && o.month == month)
    }

    /// Sets the night start override for a month, replacing any earlier one
    /// for the same year and month; returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidMonth`] if the month is not in 1..=12.
    pub fn upsert_night_override(
        &mut self,
        mut night_override: MonthlyNightOverride,
    ) -> Result<u64, RosterError> {
        if !(1..=12).contains(&night_override.month) {
            return Err(RosterError::InvalidMonth {
                month: night_override.month,
            });
        }
        if night_override.id == 0 {
            if let Some(existing) =
                self.monthly_night_override(night_override.year, night_override.month)
            {
                night_override.id = existing.id;
            }
        }
        Ok(upsert_by_id(
            &mut self.night_overrides,
            &mut self.next_id,
            night_override,
            |o| &mut o.id,
        ))
    }
}
