use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "shiftcal.toml";

/// Top-level shiftcal configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ShiftcalConfig {
    /// Calendar layout settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Where settings and roster records are stored.
    #[serde(default)]
    pub store: StoreToml,

    /// Which cycle labels carry day and night start times.
    #[serde(default)]
    pub labels: LabelsToml,
}

impl ShiftcalConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and built-in defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default)]
    pub start_offset: i64,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            week_start: default_week_start(),
            start_offset: 0,
        }
    }
}

fn default_week_start() -> String {
    "sunday".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreToml {
    #[serde(default = "default_settings_path")]
    pub settings: PathBuf,
    #[serde(default = "default_roster_path")]
    pub roster: PathBuf,
}

impl Default for StoreToml {
    fn default() -> Self {
        Self {
            settings: default_settings_path(),
            roster: default_roster_path(),
        }
    }
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("shiftcal-settings.toml")
}
fn default_roster_path() -> PathBuf {
    PathBuf::from("shiftcal-roster.json")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelsToml {
    #[serde(default = "default_day_labels")]
    pub day: Vec<String>,
    #[serde(default = "default_night_labels")]
    pub night: Vec<String>,
}

impl Default for LabelsToml {
    fn default() -> Self {
        Self {
            day: default_day_labels(),
            night: default_night_labels(),
        }
    }
}

fn default_day_labels() -> Vec<String> {
    vec!["주".to_string()]
}
fn default_night_labels() -> Vec<String> {
    vec!["야".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config: ShiftcalConfig = toml::from_str("").unwrap();
        assert_eq!(config.calendar.week_start, "sunday");
        assert_eq!(config.calendar.start_offset, 0);
        assert_eq!(config.store.settings, PathBuf::from("shiftcal-settings.toml"));
        assert_eq!(config.labels.night, ["야"]);
    }

    #[test]
    fn full_toml() {
        let config: ShiftcalConfig = toml::from_str(
            r#"
            [calendar]
            week_start = "monday"
            start_offset = -1

            [store]
            settings = "/tmp/s.toml"
            roster = "/tmp/r.json"

            [labels]
            day = ["D", "E"]
            night = ["N"]
            "#,
        )
        .unwrap();
        assert_eq!(config.calendar.week_start, "monday");
        assert_eq!(config.calendar.start_offset, -1);
        assert_eq!(config.store.roster, PathBuf::from("/tmp/r.json"));
        assert_eq!(config.labels.day, ["D", "E"]);
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<ShiftcalConfig>("[calendar]\nweekstart = \"mon\"\n").is_err());
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = ShiftcalConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn explicit_path_is_read() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("shiftcal.toml");
        std::fs::write(&path, "[calendar]\nweek_start = \"sat\"\n").unwrap();
        let config = ShiftcalConfig::load(Some(&path)).unwrap();
        assert_eq!(config.calendar.week_start, "sat");
    }
}
