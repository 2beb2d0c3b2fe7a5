//! Workplace list with a current selection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SettingsError;

/// Workplaces stored when nothing has been configured.
pub const DEFAULT_WORKPLACES: &str = "계양,공항";

/// On-disk form; normalised into [`Workplaces`] on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct WorkplacesToml {
    #[serde(default)]
    names: Vec<String>,
    #[serde(default)]
    current: Option<String>,
}

/// A non-empty list of workplaces and the one currently selected.
///
/// The selection is always a member of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WorkplacesToml", into = "WorkplacesToml")]
pub struct Workplaces {
    names: Vec<String>,
    current: usize,
}

fn split_csv(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Workplaces {
    /// Creates a list with the first name selected.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::EmptyWorkplaces`] if `names` is empty.
    pub fn new(names: Vec<String>) -> Result<Self, SettingsError> {
        if names.is_empty() {
            return Err(SettingsError::EmptyWorkplaces);
        }
        Ok(Self { names, current: 0 })
    }

    /// Parses a comma-separated list, e.g. `"SiteA, SiteB"`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::EmptyWorkplaces`] if no name remains after trimming.
    pub fn from_csv(csv: &str) -> Result<Self, SettingsError> {
        Self::new(split_csv(csv))
    }

    /// Returns the workplace names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the selected workplace.
    pub fn current(&self) -> &str {
        &self.names[self.current]
    }

    /// Renders the list back to comma-separated form.
    pub fn to_csv(&self) -> String {
        self.names.join(",")
    }

    /// Replaces the list from `csv` when it names at least one workplace.
    ///
    /// The selection is kept if it is still listed and otherwise moves to the
    /// first entry. An empty `csv` leaves everything unchanged and returns
    /// `false`.
    pub fn apply_csv(&mut self, csv: &str) -> bool {
        let names = split_csv(csv);
        if names.is_empty() {
            debug!(csv, "ignoring empty workplace list");
            return false;
        }
        let current = self.current().to_string();
        self.current = names.iter().position(|n| *n == current).unwrap_or(0);
        self.names = names;
        true
    }

    /// Advances the selection to the next workplace, wrapping around.
    pub fn toggle(&mut self) -> &str {
        self.current = (self.current + 1) % self.names.len();
        self.current()
    }

    /// Selects `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownWorkplace`] if `name` is not listed;
    /// the selection is left unchanged.
    pub fn select(&mut self, name: &str) -> Result<(), SettingsError> {
        match self.names.iter().position(|n| n == name) {
            Some(idx) => {
                self.current = idx;
                Ok(())
            }
            None => Err(SettingsError::UnknownWorkplace {
                name: name.to_string(),
            }),
        }
    }
}

impl Default for Workplaces {
    fn default() -> Self {
        Self {
            names: split_csv(DEFAULT_WORKPLACES),
            current: 0,
        }
    }
}

impl From<WorkplacesToml> for Workplaces {
    fn from(raw: WorkplacesToml) -> Self {
        let names: Vec<String> = raw
            .names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            return Self::default();
        }
        let current = raw
            .current
            .and_then(|c| names.iter().position(|n| *n == c))
            .unwrap_or(0);
        Self { names, current }
    }
}

impl From<Workplaces> for WorkplacesToml {
    fn from(value: Workplaces) -> Self {
        let current = Some(value.current().to_string());
        Self {
            names: value.names,
            current,
        }
    }
}
