//! Error types for the shiftcal-calendar crate.

/// Error type for all fallible operations in the shiftcal-calendar crate.
///
/// Grid construction itself cannot fail; these variants cover validation of
/// the inputs handed to the calculator (month numbers, month keys, weekday
/// names) and the empty-cycle case of label lookup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a cycle has no labels to index into.
    #[error("invalid input: cycle must contain at least one label")]
    EmptyCycle,

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a year cannot be represented as a calendar date.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The year that was provided.
        year: i32,
    },

    /// Returned when a `YYYY-MM` month key cannot be parsed.
    #[error("invalid month key: {key:?} (expected YYYY-MM)")]
    InvalidMonthKey {
        /// The text that failed to parse.
        key: String,
    },

    /// Returned when a weekday name is not recognised.
    #[error("invalid weekday: {name:?}")]
    InvalidWeekday {
        /// The text that failed to parse.
        name: String,
    },
}
