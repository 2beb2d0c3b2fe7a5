//! Error types for the shiftcal-settings crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the shiftcal-settings crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// Returned when the settings file cannot be read or written.
    #[error("settings i/o error at {}: {reason}", path.display())]
    Io {
        /// Path of the settings file.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when the settings file is not valid settings TOML.
    #[error("failed to parse settings at {}: {reason}", path.display())]
    Parse {
        /// Path of the settings file.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// Returned when saving over a settings file that failed to load.
    #[error("refusing to overwrite unreadable settings at {}: {reason}", path.display())]
    WouldOverwrite {
        /// Path of the settings file.
        path: PathBuf,
        /// Why the existing file could not be loaded.
        reason: String,
    },

    /// Returned when settings cannot be rendered to TOML.
    #[error("failed to serialize settings: {reason}")]
    Serialize {
        /// Description of the serialization failure.
        reason: String,
    },

    /// Returned when a start time is not a valid `HH:mm` clock time.
    #[error("invalid time: {value:?} (expected HH:mm, e.g. 09:00 or 22:00)")]
    InvalidTime {
        /// The rejected text.
        value: String,
    },

    /// Returned when a workplace list contains no names.
    #[error("workplace list must contain at least one name")]
    EmptyWorkplaces,

    /// Returned when selecting a workplace that is not in the list.
    #[error("unknown workplace: {name:?}")]
    UnknownWorkplace {
        /// The requested workplace name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_time() {
        let err = SettingsError::InvalidTime {
            value: "9:00".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid time: \"9:00\" (expected HH:mm, e.g. 09:00 or 22:00)"
        );
    }

    #[test]
    fn error_io_shows_path() {
        let err = SettingsError::Io {
            path: PathBuf::from("/tmp/settings.toml"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "settings i/o error at /tmp/settings.toml: permission denied"
        );
    }

    #[test]
    fn error_would_overwrite_shows_path() {
        let err = SettingsError::WouldOverwrite {
            path: PathBuf::from("settings.toml"),
            reason: "bad key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "refusing to overwrite unreadable settings at settings.toml: bad key"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<SettingsError>();
    }
}
