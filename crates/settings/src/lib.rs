//! # shiftcal-settings
//!
//! Persisted user preferences for the shift calendar: the work cycle,
//! default day/night start times, the per-month start-time history and the
//! workplace list.
//!
//! Settings live in a single TOML file. Reading never blocks the calendar:
//! a missing or malformed file yields the built-in defaults, and an empty
//! stored cycle is replaced by [`DEFAULT_WORK_CYCLE`] before it reaches the
//! calculator. Writing is stricter: a store that fell back over a file it
//! could not load refuses to save, so use [`SettingsStore::load_or_default`]
//! before changing settings.
//!
//! ## Quick Start
//!
//! ```ignore
//! use shiftcal_settings::{LabelKinds, SettingsStore};
//!
//! let mut store = SettingsStore::load_or_default("shiftcal-settings.toml")?;
//! store.set_cycle("주,주,야,야,휴,휴");
//! store.set_default_times("09:00", "22:00", month)?;
//! store.save()?;
//!
//! let label = store.cycle().label_for(date);
//! let start = store.start_time_for(label, month, &LabelKinds::default());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `store` | Settings struct and file-backed store |
//! | `history` | Month start-time history and label classification |
//! | `time` | Strict `HH:mm` clock times |
//! | `workplace` | Workplace list with selection |
//! | `error` | Error types |

mod error;
mod history;
mod store;
mod time;
mod workplace;

pub use error::SettingsError;
pub use history::{LabelKinds, MonthHistory, ShiftKind, StartTimes};
pub use store::{
    DEFAULT_DAY_TIME, DEFAULT_NIGHT_TIME, DEFAULT_WORK_CYCLE, Settings, SettingsStore,
    default_cycle,
};
pub use time::ClockTime;
pub use workplace::{DEFAULT_WORKPLACES, Workplaces};
