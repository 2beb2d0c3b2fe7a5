//! # shiftcal-calendar
//!
//! Pure date arithmetic for the shift calendar: month grid layout and
//! repeating shift cycle assignment over the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month)"] -->|"YearMonth::new()"| B["YearMonth"]
//!     B -->|"build_month_grid(week_start)"| C["MonthGrid"]
//!     C -->|".days()"| D["NaiveDate"]
//!     E["labels / CSV"] -->|"Cycle::new() / from_csv()"| F["Cycle"]
//!     D -->|"Cycle::label_for()"| G["label"]
//!     F --> G
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::Weekday;
//! use shiftcal_calendar::{Cycle, YearMonth, build_month_grid};
//!
//! let month = YearMonth::new(2025, 9).unwrap();
//! let grid = build_month_grid(month, Weekday::Sun);
//! assert_eq!(grid.len(), 35);
//!
//! let cycle = Cycle::from_csv("주,주,야,야,휴,휴").unwrap();
//! for date in grid.days() {
//!     println!("{date}: {}", cycle.label_for(date));
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Year-month value, leap years and month lengths |
//! | `weekday` | Week-start column arithmetic and weekday parsing |
//! | `grid` | Month grid of blank and day cells |
//! | `cycle` | Shift cycle and per-date label lookup |
//! | `error` | Error types |

mod cycle;
mod error;
mod grid;
mod month;
mod weekday;

pub use chrono::{NaiveDate, Weekday};
pub use cycle::{Cycle, cycle_label_for, floor_mod};
pub use error::CalendarError;
pub use grid::{CalendarCell, MonthGrid, build_month_grid};
pub use month::{YearMonth, days_in_month, is_leap_year};
pub use weekday::{DAYS_PER_WEEK, parse_weekday, week_sequence, weekday_distance};
