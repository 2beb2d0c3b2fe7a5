//! Error types for the shiftcal-roster crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the shiftcal-roster crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RosterError {
    /// Returned when the roster file cannot be read or written.
    #[error("roster i/o error at {}: {reason}", path.display())]
    Io {
        /// Path of the roster file.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when roster JSON cannot be parsed or rendered.
    #[error("roster json error: {reason}")]
    Json {
        /// Description of the serde_json failure.
        reason: String,
    },

    /// Returned when a routine id is not present.
    #[error("unknown routine id: {id}")]
    UnknownRoutine {
        /// The requested routine id.
        id: u64,
    },

    /// Returned when a routine entry refers to a missing shift type.
    #[error("unknown shift type id: {id}")]
    UnknownShiftType {
        /// The referenced shift type id.
        id: u64,
    },

    /// Returned when a routine has no entries to build a cycle from.
    #[error("routine {id} has no entries")]
    EmptyRoutine {
        /// The routine id.
        id: u64,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The rejected month.
        month: u8,
    },
}
