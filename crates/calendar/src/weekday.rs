//! Week-start convention and weekday column arithmetic.

use chrono::Weekday;

use crate::error::CalendarError;

/// Number of columns in a month grid.
pub const DAYS_PER_WEEK: usize = 7;

/// Number of columns between `week_start` and `target`, in `0..7`.
///
/// This is the count of blank cells that precede a month whose first day
/// falls on `target`.
pub fn weekday_distance(week_start: Weekday, target: Weekday) -> usize {
    let start = week_start.num_days_from_monday() as usize;
    let target = target.num_days_from_monday() as usize;
    (target + DAYS_PER_WEEK - start) % DAYS_PER_WEEK
}

/// The seven weekdays in grid column order, starting at `week_start`.
pub fn week_sequence(week_start: Weekday) -> [Weekday; DAYS_PER_WEEK] {
    let mut days = [week_start; DAYS_PER_WEEK];
    for i in 1..DAYS_PER_WEEK {
        days[i] = days[i - 1].succ();
    }
    days
}

/// Parses a weekday name such as `sunday`, `Sun` or `MON`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidWeekday`] for anything else.
pub fn parse_weekday(name: &str) -> Result<Weekday, CalendarError> {
    match name.trim().to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(CalendarError::InvalidWeekday {
            name: name.to_string(),
        }),
    }
}
