//! File-backed settings store with fallback to built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shiftcal_calendar::{Cycle, YearMonth};
use tracing::{debug, info, warn};

use crate::error::SettingsError;
use crate::history::{LabelKinds, MonthHistory, ShiftKind, StartTimes};
use crate::time::ClockTime;
use crate::workplace::Workplaces;

/// Cycle used when none is stored or the stored one has no labels.
pub const DEFAULT_WORK_CYCLE: &str = "주,주,야,야,휴,휴";
/// Day shift start time used when none is stored.
pub const DEFAULT_DAY_TIME: &str = "09:00";
/// Night shift start time used when none is stored.
pub const DEFAULT_NIGHT_TIME: &str = "18:00";

fn default_work_cycle() -> String {
    DEFAULT_WORK_CYCLE.to_string()
}
fn default_day_time() -> ClockTime {
    DEFAULT_DAY_TIME
        .parse()
        .expect("DEFAULT_DAY_TIME is a valid HH:mm time")
}
fn default_night_time() -> ClockTime {
    DEFAULT_NIGHT_TIME
        .parse()
        .expect("DEFAULT_NIGHT_TIME is a valid HH:mm time")
}

/// The persisted user preferences.
///
/// Missing keys take their defaults, so older or partial files still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Comma-separated work cycle, as entered by the user.
    #[serde(default = "default_work_cycle")]
    pub work_cycle: String,
    /// Default day shift start time.
    #[serde(default = "default_day_time")]
    pub day_default: ClockTime,
    /// Default night shift start time.
    #[serde(default = "default_night_time")]
    pub night_default: ClockTime,
    /// Start times recorded per month.
    #[serde(default)]
    pub cycle_history: MonthHistory,
    /// Workplace list and selection.
    #[serde(default)]
    pub workplaces: Workplaces,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_cycle: default_work_cycle(),
            day_default: default_day_time(),
            night_default: default_night_time(),
            cycle_history: MonthHistory::default(),
            workplaces: Workplaces::default(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] tagged with `path` on malformed input.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, SettingsError> {
        toml::from_str(text).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Renders settings as TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Serialize`] if rendering fails.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Serialize {
            reason: e.to_string(),
        })
    }
}

/// Settings bound to the file they are loaded from and saved to.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
    /// Set when `open` fell back to defaults over an existing file.
    load_error: Option<String>,
}

impl SettingsStore {
    /// Loads settings from `path`, requiring the file to exist and parse.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] if the file cannot be read, or
    /// [`SettingsError::Parse`] if it is not valid settings TOML.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|e| SettingsError::Io {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let settings = Settings::from_toml(&text, &path)?;
        debug!(path = %path.display(), "settings loaded");
        Ok(Self::with_settings(path, settings))
    }

    /// Loads settings from `path`, using defaults only when the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Same as [`SettingsStore::load`] for a file that exists.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        if !path.exists() {
            info!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::with_settings(path, Settings::default()));
        }
        Self::load(path)
    }

    /// Loads settings from `path`, falling back to defaults.
    ///
    /// A missing file is the normal first-run case. An unreadable or
    /// malformed file is logged and left untouched: the returned store
    /// holds defaults and refuses to [`save`](Self::save) over it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::load_or_default(path.clone()) {
            Ok(store) => store,
            Err(e) => {
                warn!(error = %e, "failed to load settings, using defaults");
                Self {
                    load_error: Some(e.to_string()),
                    ..Self::with_settings(path, Settings::default())
                }
            }
        }
    }

    /// Binds `settings` to `path` without touching the filesystem.
    pub fn with_settings(path: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            path: path.into(),
            settings,
            load_error: None,
        }
    }

    /// Writes the settings to their file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::WouldOverwrite`] if this store came from
    /// [`open`](Self::open) falling back over a file it could not load,
    /// otherwise [`SettingsError::Io`] or [`SettingsError::Serialize`].
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(reason) = &self.load_error {
            return Err(SettingsError::WouldOverwrite {
                path: self.path.clone(),
                reason: reason.clone(),
            });
        }
        let io_err = |e: std::io::Error| SettingsError::Io {
            path: self.path.clone(),
            reason: e.to_string(),
        };
        let text = self.settings.to_toml()?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&self.path, text).map_err(io_err)?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the work cycle, substituting the default when the stored
    /// cycle has no labels.
    pub fn cycle(&self) -> Cycle {
        Cycle::from_csv(&self.settings.work_cycle).unwrap_or_else(|_| {
            warn!(
                stored = %self.settings.work_cycle,
                "stored work cycle is empty, using default"
            );
            default_cycle()
        })
    }

    /// Stores a comma-separated work cycle and returns the cycle now in effect.
    pub fn set_cycle(&mut self, csv: &str) -> Cycle {
        self.settings.work_cycle = csv.trim().to_string();
        self.cycle()
    }

    /// Returns the default day shift start time.
    pub fn day_default(&self) -> ClockTime {
        self.settings.day_default
    }

    /// Returns the default night shift start time.
    pub fn night_default(&self) -> ClockTime {
        self.settings.night_default
    }

    /// Validates and stores default start times, and records them for `month`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidTime`] if either value is not `HH:mm`;
    /// nothing is stored in that case.
    pub fn set_default_times(
        &mut self,
        day: &str,
        night: &str,
        month: YearMonth,
    ) -> Result<StartTimes, SettingsError> {
        let day: ClockTime = day.trim().parse()?;
        let night: ClockTime = night.trim().parse()?;
        let times = StartTimes::new(day, night);
        self.settings.day_default = day;
        self.settings.night_default = night;
        self.settings.cycle_history.record(month, times);
        Ok(times)
    }

    /// Returns the per-month start-time history.
    pub fn history(&self) -> &MonthHistory {
        &self.settings.cycle_history
    }

    /// Start time shown for a shift `label` in `month`.
    ///
    /// Day and night labels use the month's recorded time, else the default.
    /// Other labels have no start time.
    pub fn start_time_for(
        &self,
        label: &str,
        month: YearMonth,
        kinds: &LabelKinds,
    ) -> Option<ClockTime> {
        let recorded = self.history().get(month).unwrap_or_default();
        match kinds.kind_of(label) {
            ShiftKind::Day => Some(recorded.day.unwrap_or(self.settings.day_default)),
            ShiftKind::Night => Some(recorded.night.unwrap_or(self.settings.night_default)),
            ShiftKind::Other => None,
        }
    }

    /// Returns the workplace list.
    pub fn workplaces(&self) -> &Workplaces {
        &self.settings.workplaces
    }

    /// Returns the workplace list for modification.
    pub fn workplaces_mut(&mut self) -> &mut Workplaces {
        &mut self.settings.workplaces
    }
}

/// The built-in default cycle.
pub fn default_cycle() -> Cycle {
    Cycle::from_csv(DEFAULT_WORK_CYCLE).expect("default cycle is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(y: i32, m: u8) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    fn store() -> SettingsStore {
        SettingsStore::with_settings("unused.toml", Settings::default())
    }

    #[test]
    fn defaults() {
        let s = store();
        assert_eq!(s.cycle().to_csv(), DEFAULT_WORK_CYCLE);
        assert_eq!(s.day_default().to_string(), DEFAULT_DAY_TIME);
        assert_eq!(s.night_default().to_string(), DEFAULT_NIGHT_TIME);
        assert!(s.history().is_empty());
        assert_eq!(s.workplaces().current(), "계양");
    }

    #[test]
    fn empty_cycle_falls_back() {
        let mut s = store();
        let effective = s.set_cycle(" , ");
        assert_eq!(effective, default_cycle());
        assert_eq!(s.settings().work_cycle, ",");
    }

    #[test]
    fn set_cycle_trims() {
        let mut s = store();
        let cycle = s.set_cycle("  D,N,off  ");
        assert_eq!(cycle.labels(), ["D", "N", "off"]);
        assert_eq!(s.settings().work_cycle, "D,N,off");
    }

    #[test]
    fn set_default_times_records_month() {
        let mut s = store();
        s.set_default_times("08:30", "22:00", ym(2025, 9)).unwrap();
        assert_eq!(s.day_default().to_string(), "08:30");
        assert_eq!(s.night_default().to_string(), "22:00");
        assert_eq!(s.history().to_string(), "2025-09=08:30|22:00");
    }

    #[test]
    fn set_default_times_rejects_bad_format() {
        let mut s = store();
        let err = s.set_default_times("9:00", "22:00", ym(2025, 9)).unwrap_err();
        assert_eq!(
            err,
            SettingsError::InvalidTime {
                value: "9:00".to_string()
            }
        );
        assert!(s.history().is_empty());
        assert_eq!(s.day_default().to_string(), DEFAULT_DAY_TIME);
    }

    #[test]
    fn start_time_prefers_month_history() {
        let mut s = store();
        s.set_default_times("08:00", "21:00", ym(2025, 9)).unwrap();
        s.settings.day_default = ClockTime::from_hm(10, 0).unwrap();
        let kinds = LabelKinds::default();
        assert_eq!(
            s.start_time_for("주", ym(2025, 9), &kinds).unwrap().to_string(),
            "08:00"
        );
        assert_eq!(
            s.start_time_for("야", ym(2025, 9), &kinds).unwrap().to_string(),
            "21:00"
        );
        // Another month uses the defaults.
        assert_eq!(
            s.start_time_for("주", ym(2025, 10), &kinds).unwrap().to_string(),
            "10:00"
        );
        assert_eq!(s.start_time_for("휴", ym(2025, 9), &kinds), None);
    }

    #[test]
    fn toml_round_trip() {
        let mut s = store();
        s.set_cycle("A,B");
        s.set_default_times("07:00", "19:00", ym(2025, 1)).unwrap();
        s.workplaces_mut().toggle();
        let text = s.settings().to_toml().unwrap();
        let parsed = Settings::from_toml(&text, Path::new("x.toml")).unwrap();
        assert_eq!(&parsed, s.settings());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let parsed = Settings::from_toml("work_cycle = \"D,N\"\n", Path::new("x.toml")).unwrap();
        assert_eq!(parsed.work_cycle, "D,N");
        assert_eq!(parsed.day_default.to_string(), DEFAULT_DAY_TIME);
        assert_eq!(parsed.workplaces, Workplaces::default());
    }

    #[test]
    fn invalid_time_in_toml_is_parse_error() {
        let err = Settings::from_toml("day_default = \"9am\"\n", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }
}
