use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JULY, LEAP_YEAR_CYCLE, LONG_MONTH_DAYS, MIN_DAY, SHORT_MONTH_DAYS,
};
use crate::CalendarError;
use crate::prelude::*;
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A wall-clock date and time.
///
/// Months are 0-based (January is 0). The value is `Copy`: functions that
/// change a date take `&mut CalendarDate`, everything else works on copies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[display(fmt = "{_0}")]
#[serde(transparent)]
pub struct CalendarDate(NaiveDateTime);

impl CalendarDate {
    /// Creates a date at midnight.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the fields do not name a real day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    /// Creates a date with a time of day.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the fields do not name a real day,
    /// or `CalendarError::InvalidTime` for an impossible time of day.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, CalendarError> {
        let date = naive_date(i64::from(year), month, day)?;
        date.and_hms_opt(hour, minute, second)
            .map(Self)
            .ok_or(CalendarError::InvalidTime {
                hour,
                minute,
                second,
            })
    }

    /// Creates a date from milliseconds since the Unix epoch.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTimestamp` if the instant is not representable.
    pub fn from_timestamp_millis(millis: i64) -> Result<Self, CalendarError> {
        DateTime::from_timestamp_millis(millis)
            .map(|dt| Self(dt.naive_utc()))
            .ok_or(CalendarError::InvalidTimestamp(millis))
    }

    /// Milliseconds since the Unix epoch
    pub fn timestamp_millis(&self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }

    /// Moves this date to another instant.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTimestamp` if the instant is not representable.
    pub fn set_timestamp_millis(&mut self, millis: i64) -> Result<(), CalendarError> {
        *self = Self::from_timestamp_millis(millis)?;
        Ok(())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month index, January = 0
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    /// Day of month, starting at 1
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn millisecond(&self) -> u32 {
        self.0.and_utc().timestamp_subsec_millis()
    }

    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from(self.0.weekday())
    }

    /// `(year, month)` pair, ordered chronologically
    pub fn year_month(&self) -> (i32, u32) {
        (self.year(), self.month0())
    }

    /// Returns the underlying chrono value
    pub const fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns a copy with the given calendar fields, keeping the time of day.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the fields do not name a real day.
    pub fn with_ymd(&self, year: i64, month: u32, day: u32) -> Result<Self, CalendarError> {
        let date = naive_date(year, month, day)?;
        Ok(Self(date.and_time(self.0.time())))
    }

    /// Returns a copy in another year.
    ///
    /// A day that does not exist in the new year (Feb 29) rolls over into the
    /// following month instead of failing.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the year is not representable.
    pub fn with_year_lenient(&self, year: i32) -> Result<Self, CalendarError> {
        let first = naive_date(i64::from(year), self.month0(), MIN_DAY)?;
        first
            .checked_add_days(Days::new(u64::from(self.day() - MIN_DAY)))
            .map(|date| Self(date.and_time(self.0.time())))
            .ok_or(CalendarError::OutOfRange {
                year: i64::from(year),
                month: self.month0(),
                day: self.day(),
            })
    }
}

fn naive_date(year: i64, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    let out_of_range = CalendarError::OutOfRange { year, month, day };
    let year = i32::try_from(year).map_err(|_| out_of_range.clone())?;
    month
        .checked_add(1)
        .and_then(|month1| NaiveDate::from_ymd_opt(year, month1, day))
        .ok_or(out_of_range)
}

/// A day of the week in the range `0..DAYS_PER_WEEK`, Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);
    pub const SATURDAY: Self = Self(6);

    /// Creates a new `DayOfWeek`, validating the range
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDayOfWeek` if the value is >= `DAYS_PER_WEEK`.
    pub const fn new(value: u8) -> Result<Self, CalendarError> {
        if value >= DAYS_PER_WEEK {
            return Err(CalendarError::InvalidDayOfWeek(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        // num_days_from_sunday is always 0..=6
        Self(weekday.num_days_from_sunday() as u8)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Whether a month has 30 days. With January at 0 the short months are the
/// odd indices up to July and the even ones after it.
pub const fn is_short_month(month: u32) -> bool {
    if month <= JULY {
        month % 2 != 0
    } else {
        month % 2 == 0
    }
}

/// Number of days in a 0-based month
pub const fn days_in_month(year: i64, month: u32) -> u32 {
    if month == FEBRUARY {
        if is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            FEBRUARY_DAYS
        }
    } else if is_short_month(month) {
        SHORT_MONTH_DAYS
    } else {
        LONG_MONTH_DAYS
    }
}
