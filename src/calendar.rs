//! Date arithmetic used by the month selector.
//!
//! Functions taking `&mut CalendarDate` change the date in place; the rest
//! work on copies and leave their arguments alone.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

use crate::consts::{
    FEBRUARY, FEBRUARY_DAYS, FEBRUARY_DAYS_LEAP, LONG_MONTH_DAYS, MILLIS_PER_DAY, MILLIS_PER_HOUR,
    MIN_DAY, MONTHS_PER_YEAR, RESET_HOUR, SHORT_MONTH_DAYS,
};
use crate::locale::Locale;
use crate::types::{CalendarDate, DayOfWeek, is_leap_year, is_short_month};
use crate::CalendarError;

/// Shifts the calendar day by `days`, rolling over months and years.
///
/// # Errors
/// Returns `CalendarError::DayOverflow` if the result is not representable.
pub fn add_days_to_date(date: &mut CalendarDate, days: i64) -> Result<(), CalendarError> {
    let shifted = TimeDelta::try_days(days)
        .and_then(|delta| date.naive().checked_add_signed(delta))
        .ok_or(CalendarError::DayOverflow { date: *date, days })?;
    *date = shifted.into();
    Ok(())
}

/// Shifts the date by `months`, clamping the day-of-month to the length of
/// the landing month. Time of day is kept.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the landing year is not representable.
pub fn add_months_to_date(date: &mut CalendarDate, months: i32) -> Result<(), CalendarError> {
    if months == 0 {
        return Ok(());
    }

    let month_count = i64::from(date.year()) * i64::from(MONTHS_PER_YEAR)
        + i64::from(date.month0())
        + i64::from(months);
    let result_year = month_count.div_euclid(i64::from(MONTHS_PER_YEAR));
    // rem_euclid by 12 is always in 0..12
    let result_month = month_count.rem_euclid(i64::from(MONTHS_PER_YEAR)) as u32;

    let day = clamp_day(date.day(), result_year, result_month);
    *date = date.with_ymd(result_year, result_month, day)?;
    Ok(())
}

fn clamp_day(day: u32, year: i64, month: u32) -> u32 {
    if month == FEBRUARY && day > FEBRUARY_DAYS {
        if is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            FEBRUARY_DAYS
        }
    } else if day == LONG_MONTH_DAYS && is_short_month(month) {
        SHORT_MONTH_DAYS
    } else {
        day
    }
}

/// Copies a date. Absent in, absent out.
pub fn copy_date(date: Option<&CalendarDate>) -> Option<CalendarDate> {
    date.copied()
}

/// Number of whole days from `start` to `finish`. Time of day is ignored.
pub fn get_days_between(start: CalendarDate, finish: CalendarDate) -> i64 {
    let mut start = start;
    reset_time(&mut start);
    let mut finish = finish;
    reset_time(&mut finish);

    let a_time = start.timestamp_millis();
    let b_time = finish.timestamp_millis();

    // absorbs a daylight-saving hour either way
    let adjust = if b_time > a_time {
        MILLIS_PER_HOUR
    } else {
        -MILLIS_PER_HOUR
    };

    (b_time - a_time + adjust) / MILLIS_PER_DAY
}

/// Whether both dates fall on the same calendar day, regardless of time
pub fn is_same_date(date0: &CalendarDate, date1: &CalendarDate) -> bool {
    date0.year() == date1.year() && date0.month0() == date1.month0() && date0.day() == date1.day()
}

/// Moves the date to noon on the first day of its month.
pub fn set_to_first_day_of_month(date: &mut CalendarDate) {
    reset_time(date);
    let back = TimeDelta::days(i64::from(date.day() - MIN_DAY));
    *date = (date.naive() - back).into();
}

/// Drops the time of day, sub-second part included, and sets it to noon.
///
/// Daylight-saving transitions happen at midnight in some zones, never at noon.
pub(crate) fn reset_time(date: &mut CalendarDate) {
    let (noon, _) = NaiveTime::MIN.overflowing_add_signed(TimeDelta::hours(i64::from(RESET_HOUR)));
    *date = NaiveDateTime::new(date.naive().date(), noon).into();
}

/// Locale-dependent calendar facts: where the week starts and which days
/// make up the weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarUtil {
    starting_day: DayOfWeek,
    first_day_of_weekend: DayOfWeek,
    last_day_of_weekend: DayOfWeek,
}

impl CalendarUtil {
    pub fn new(locale: &Locale) -> Self {
        Self {
            starting_day: locale.first_day_of_week(),
            first_day_of_weekend: locale.weekend_start(),
            last_day_of_weekend: locale.weekend_end(),
        }
    }

    /// Day the week starts on, Sunday = 0
    pub const fn starting_day_of_week(&self) -> DayOfWeek {
        self.starting_day
    }

    pub fn is_weekend(&self, day_of_week: DayOfWeek) -> bool {
        day_of_week == self.first_day_of_weekend || day_of_week == self.last_day_of_weekend
    }
}

impl Default for CalendarUtil {
    fn default() -> Self {
        Self::new(&Locale::default())
    }
}
