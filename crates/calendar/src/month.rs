//! Year-month value with proleptic Gregorian month lengths.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year` (28..=31).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(CalendarError::InvalidMonth { month }),
    }
}

/// A calendar month with year context.
///
/// Holds the first day of the month, so every accessor is infallible once
/// the value exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12, or
    /// [`CalendarError::YearOutOfRange`] if the whole month cannot be
    /// represented as dates.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        let length = days_in_month(year, month)?;
        let first = NaiveDate::from_ymd_opt(year, u32::from(month), 1);
        let last = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(length));
        match (first, last) {
            (Some(first), Some(_)) => Ok(Self { first }),
            _ => Err(CalendarError::YearOutOfRange { year }),
        }
    }

    /// Returns the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first: date - chrono::Days::new(u64::from(date.day0())),
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.first.month() as u8
    }

    /// Returns the first day of the month.
    pub fn first_day(self) -> NaiveDate {
        self.first
    }

    /// Returns the number of days in the month (28..=31).
    pub fn length_of_month(self) -> u8 {
        match self.month() {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ if is_leap_year(self.year()) => 29,
            _ => 28,
        }
    }

    /// Returns the date for `day` within this month, if it exists.
    pub fn day(self, day: u8) -> Option<NaiveDate> {
        if (1..=self.length_of_month()).contains(&day) {
            self.first.with_day(u32::from(day))
        } else {
            None
        }
    }

    /// Returns `true` if `date` falls within this month.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.first.month()
    }

    /// Returns the following month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] past the last representable year.
    pub fn next_month(self) -> Result<Self, CalendarError> {
        match self.month() {
            12 => Self::new(self.year() + 1, 1),
            m => Self::new(self.year(), m + 1),
        }
    }

    /// Returns the preceding month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] before the first representable year.
    pub fn prev_month(self) -> Result<Self, CalendarError> {
        match self.month() {
            1 => Self::new(self.year() - 1, 12),
            m => Self::new(self.year(), m - 1),
        }
    }
}

/// Renders the `YYYY-MM` key used by the settings history.
impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidMonthKey { key: s.to_string() };
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        if month.len() != 2 || year.is_empty() {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(0));
    }

    #[test]
    fn days_in_month_table() {
        assert_eq!(days_in_month(2025, 1).unwrap(), 31);
        assert_eq!(days_in_month(2025, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2025, 9).unwrap(), 30);
        assert_eq!(
            days_in_month(2025, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            YearMonth::new(2025, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_year_out_of_range() {
        assert_eq!(
            YearMonth::new(i32::MAX, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: i32::MAX }
        );
    }

    #[test]
    fn accessors() {
        let ym = YearMonth::new(2025, 9).unwrap();
        assert_eq!(ym.year(), 2025);
        assert_eq!(ym.month(), 9);
        assert_eq!(ym.first_day(), NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert_eq!(ym.length_of_month(), 30);
    }

    #[test]
    fn length_matches_days_in_month() {
        for year in [1900, 2000, 2023, 2024] {
            for month in 1..=12u8 {
                let ym = YearMonth::new(year, month).unwrap();
                assert_eq!(ym.length_of_month(), days_in_month(year, month).unwrap());
            }
        }
    }

    #[test]
    fn day_lookup() {
        let ym = YearMonth::new(2024, 2).unwrap();
        assert_eq!(ym.day(29), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(ym.day(30), None);
        assert_eq!(ym.day(0), None);
    }

    #[test]
    fn of_date() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 17).unwrap();
        let ym = YearMonth::of(date);
        assert_eq!(ym, YearMonth::new(2025, 9).unwrap());
        assert!(ym.contains(date));
        assert!(!ym.contains(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()));
    }

    #[test]
    fn navigation_wraps_years() {
        let dec = YearMonth::new(2025, 12).unwrap();
        assert_eq!(dec.next_month().unwrap(), YearMonth::new(2026, 1).unwrap());
        let jan = YearMonth::new(2026, 1).unwrap();
        assert_eq!(jan.prev_month().unwrap(), dec);
        let jun = YearMonth::new(2025, 6).unwrap();
        assert_eq!(jun.next_month().unwrap().prev_month().unwrap(), jun);
    }

    #[test]
    fn display_key() {
        assert_eq!(YearMonth::new(2025, 9).unwrap().to_string(), "2025-09");
        assert_eq!(YearMonth::new(812, 12).unwrap().to_string(), "0812-12");
    }

    #[test]
    fn parse_key() {
        assert_eq!(
            "2025-09".parse::<YearMonth>().unwrap(),
            YearMonth::new(2025, 9).unwrap()
        );
        assert_eq!(
            " 2024-02 ".parse::<YearMonth>().unwrap(),
            YearMonth::new(2024, 2).unwrap()
        );
    }

    #[test]
    fn parse_key_rejects_malformed() {
        for key in ["2025", "2025-9", "2025/09", "-09", "abcd-09"] {
            assert_eq!(
                key.parse::<YearMonth>().unwrap_err(),
                CalendarError::InvalidMonthKey {
                    key: key.to_string()
                },
                "key {key:?} should be rejected"
            );
        }
        assert_eq!(
            "2025-13".parse::<YearMonth>().unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }
}
