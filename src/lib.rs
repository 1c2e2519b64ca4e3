mod calendar;
mod config;
mod consts;
mod locale;
mod model;
mod prelude;
mod selector;
mod types;

pub use calendar::{
    CalendarUtil, add_days_to_date, add_months_to_date, copy_date, get_days_between,
    is_same_date, set_to_first_day_of_month,
};
pub use config::SelectorConfig;
pub use consts::*;
pub use locale::Locale;
pub use model::{CalendarModel, MonthModel};
pub use selector::{
    ListControl, MonthSelector, NavigationControl, SelectorError, available_months,
    months_offset, year_change_delta,
};
pub use types::{CalendarDate, DayOfWeek, days_in_month, is_leap_year, is_short_month};

use crate::prelude::*;

/// Errors from date construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CalendarError {
    #[display(
        fmt = "Date out of range: {:04}-{:02}-{:02}",
        year,
        "i64::from(*month) + 1",
        day
    )]
    OutOfRange { year: i64, month: u32, day: u32 },
    #[display(fmt = "Invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    #[display(fmt = "Invalid timestamp: {_0} ms")]
    InvalidTimestamp(i64),
    #[display(fmt = "Adding {days} days to {date} overflows")]
    DayOverflow { date: CalendarDate, days: i64 },
    #[display(fmt = "Invalid day of week: {} (must be 0-{})", "_0", "DAYS_PER_WEEK - 1")]
    InvalidDayOfWeek(u8),
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", DECEMBER)]
    InvalidMonth(u32),
}

impl std::error::Error for CalendarError {}
